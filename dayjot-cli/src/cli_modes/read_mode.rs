use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use dayjot_core::{DateKey, Journal};

pub fn read_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let Some(token) = &cli.on else {
        return Ok(CliModeResult::NothingToDo);
    };
    let Some(key) = journal.resolve_date(token, None).and_then(DateKey::from_date) else {
        renderer.print_info(&format!("'{token}' is not a date I understand."));
        return Ok(CliModeResult::Finish);
    };

    match journal.read_draft(&key)? {
        Some(content) => renderer.print_draft(&key, &content),
        None => renderer.print_info(&format!("No draft for {key}.")),
    }
    Ok(CliModeResult::Finish)
}
