use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use dayjot_core::Journal;

pub fn info_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if cli.path {
        renderer.print_info(&format!("{}", journal.config.journal_dir.display()));
        return Ok(CliModeResult::Finish);
    }
    if cli.activities {
        renderer.print_catalog(&journal.catalog());
        return Ok(CliModeResult::Finish);
    }
    Ok(CliModeResult::NothingToDo)
}
