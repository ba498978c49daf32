use crate::Config;
use std::path::PathBuf;
use std::time::Duration;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(journal_dir: PathBuf) -> Config {
    Config {
        journal_dir,
        editor: None,
        date_format: "%A, %d %b %Y".to_string(),
        input_date_formats: ["%d/%m/%Y".to_string()].to_vec(),
        quiescence: Duration::from_millis(1000),
        poll_interval: Duration::from_millis(200),
        flush_on_close: true,
        activities: ["Activity1", "Activity2", "Activity3", "Activity4"]
            .map(String::from)
            .to_vec(),
    }
}
