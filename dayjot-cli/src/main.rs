mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, calendar_mode, info_mode, read_mode, session_mode};
use dayjot_core::Journal;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("dayjot: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `DAYJOT_LOG` (e.g. `DAYJOT_LOG=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DAYJOT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let journal = Journal::new()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: journal.config.date_format.to_string(),
        use_color: cli.color.enabled(),
    }));

    let modes = [info_mode, read_mode, calendar_mode, session_mode];
    for mode in modes {
        if let CliModeResult::Finish = mode(&cli, &renderer, &journal)? {
            return Ok(());
        }
    }
    Ok(())
}
