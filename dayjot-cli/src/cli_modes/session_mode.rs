use super::{
    CliModeResult,
    editor_utils::resolve_editor,
    session::{SessionOptions, run_session},
};
use crate::{cli::Cli, render::Renderer};
use anyhow::{Result, bail};
use dayjot_core::{
    ActivityCatalog, ActivitySelection, DateSelector, Journal, Route,
    navigation::RecordingNavigator,
};

/// Default mode: pick a day, open its draft, and edit it in `$EDITOR`.
pub fn session_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let route = match &cli.route {
        Some(url) => match Route::parse(url) {
            Some(route) => route,
            None => bail!("'{url}' is not a journal route"),
        },
        None => {
            let token = cli.date.as_deref().unwrap_or("today");
            match pick_date(journal, token) {
                Some(route) => route,
                None => {
                    renderer.print_info(&format!("'{token}' is not a date I understand."));
                    return Ok(CliModeResult::Finish);
                }
            }
        }
    };
    tracing::info!(%route, "navigating");

    let activities = select_activities(&journal.catalog(), &cli.activity, renderer);

    let mut drafts = journal.open_drafts();
    drafts.open(route.date.clone())?;
    let Some(key) = drafts.date().cloned() else {
        renderer.print_info("The route has no valid date, nothing would be saved.");
        return Ok(CliModeResult::Finish);
    };

    let editor = resolve_editor(&journal.config.editor);
    let options = SessionOptions {
        editor: &editor,
        poll_interval: journal.config.poll_interval,
        flush_on_close: journal.config.flush_on_close,
    };
    let outcome = run_session(&mut drafts, &options)?;

    renderer.print_draft(&key, &outcome.content);
    if !activities.is_empty() {
        renderer.print_activities(&activities);
    }
    if outcome.discarded {
        renderer.print_info("The last changes were not saved.");
    } else if outcome.saves > 0 {
        let path = journal.storage().path_for(&key);
        renderer.print_info(&format!("Saved draft to {}", path.display()));
    } else {
        renderer.print_info("No changes.");
    }
    Ok(CliModeResult::Finish)
}

/// Runs the typed token through the date selector and returns where it navigated.
fn pick_date(journal: &Journal, token: &str) -> Option<Route> {
    let mut selector = DateSelector::new(RecordingNavigator::new());
    selector.select_day(journal.resolve_date(token, None));
    selector.into_navigator().last().map(Route::from)
}

fn select_activities(
    catalog: &ActivityCatalog,
    inputs: &[String],
    renderer: &Renderer,
) -> ActivitySelection {
    let mut selection = ActivitySelection::new();
    for input in inputs {
        let label = catalog.resolve(input);
        if label.is_none() {
            tracing::warn!(input = %input, "unknown activity");
            renderer.print_info(&format!("'{input}' is not one of your activities, skipped."));
        }
        selection.select(label);
    }
    selection
}
