use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use chrono::Local;
use dayjot_core::{Journal, QueryError, date_input::resolve_month_token};

pub fn calendar_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let Some(token) = &cli.month else {
        return Ok(CliModeResult::NothingToDo);
    };
    let today = Local::now().date_naive();
    let day = if token.trim().is_empty() {
        today
    } else {
        match resolve_month_token(token) {
            Some(day) => day,
            None => {
                renderer.print_info(&format!("'{token}' is not a month, expected YYYY-MM."));
                return Ok(CliModeResult::Finish);
            }
        }
    };

    let result = journal.calendar(day);
    if let Some(month) = &result.month {
        renderer.print_calendar(month, today);
    }
    if !result.errors.is_empty() {
        print_errors(renderer, result.errors);
    }
    Ok(CliModeResult::Finish)
}

fn print_errors(renderer: &Renderer, errors: Vec<QueryError>) {
    renderer.print_md("\n# Errors:");
    for error in errors {
        match error {
            QueryError::FileError { path, error } => {
                let message = format!("* Could not process '{}': {}", path.display(), error);
                renderer.print_md(&message);
            }
            QueryError::InvalidDate { input, error } => {
                let message = format!("* Could not process '{}': {}", input, error);
                renderer.print_md(&message);
            }
        }
    }
}
