use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf, time::Duration};

use crate::activity::DEFAULT_ACTIVITIES;
use crate::date_input::DEFAULT_FORMATS;
use crate::draft::DEFAULT_QUIESCENCE;
use crate::keywords::Keywords;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where daily draft files live.
    pub journal_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Format for day headers (e.g. `Friday, 15 Mar 2024`).
    pub date_format: String,
    /// Formats tried, in order, when a date is typed.
    pub input_date_formats: Vec<String>,
    /// Idle time after the last change before a draft is written.
    pub quiescence: Duration,
    /// How often the editor buffer is checked for changes.
    pub poll_interval: Duration,
    /// Write pending changes when the editor closes instead of dropping them.
    pub flush_on_close: bool,
    /// Candidate labels for the activity picker.
    pub activities: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    quiescence_ms: Option<u64>,
    poll_interval_ms: Option<u64>,
    flush_on_close: Option<bool>,
    activities: Option<Vec<String>>,
    /// Optional table:
    /// [synonyms]
    /// ytd = "yesterday"
    /// hoy = "today"
    synonyms: Option<HashMap<String, String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global Keywords registry with user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        let input_date_formats = file_config
            .input_date_formats
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect());

        let activities = file_config
            .activities
            .unwrap_or_else(|| DEFAULT_ACTIVITIES.iter().map(|a| a.to_string()).collect());

        Self {
            journal_dir: file_config
                .journal_dir
                .unwrap_or_else(Self::default_journal_dir),
            editor: file_config.editor,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%A, %d %b %Y".to_string()),
            input_date_formats,
            quiescence: file_config
                .quiescence_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_QUIESCENCE),
            poll_interval: Duration::from_millis(file_config.poll_interval_ms.unwrap_or(200).max(10)),
            flush_on_close: file_config.flush_on_close.unwrap_or(true),
            activities,
        }
    }

    /// Default journal root: `{data_dir}/dayjot`
    /// - macOS:   `~/Library/Application Support/dayjot`
    /// - Linux:   `$XDG_DATA_HOME/dayjot` or `~/.local/share/dayjot`
    /// - Windows: `%APPDATA%\dayjot`
    fn default_journal_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("dayjot");
            p
        } else {
            PathBuf::from("./dayjot")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("dayjot")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("dayjot").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            tracing::debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits synonyms that collide with a canonical keyword (eg. "today").
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Keywords::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{Keyword, Keywords};
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("dayjot")
                .join("config.toml");
            let expected_native = b.config_dir().join("dayjot").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(cfg.quiescence, Duration::from_millis(1000));
        assert_eq!(cfg.poll_interval, Duration::from_millis(200));
        assert!(cfg.flush_on_close);
        assert_eq!(cfg.activities, DEFAULT_ACTIVITIES);
        assert_eq!(cfg.input_date_formats, DEFAULT_FORMATS);
        assert_eq!(cfg.date_format, "%A, %d %b %Y");
    }

    #[test]
    fn parse_file_accepts_every_field() {
        let toml = r#"
            journal_dir = "/tmp/my-journal"
            editor = "hx"
            date_format = "%d.%m.%Y"
            input_date_formats = ["%d.%m.%Y"]
            quiescence_ms = 2500
            poll_interval_ms = 50
            flush_on_close = false
            activities = ["Running", "Reading"]
        "#;
        let cfg = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(cfg.journal_dir, Path::new("/tmp/my-journal"));
        assert_eq!(cfg.editor.as_deref(), Some("hx"));
        assert_eq!(cfg.date_format, "%d.%m.%Y");
        assert_eq!(cfg.input_date_formats, ["%d.%m.%Y"]);
        assert_eq!(cfg.quiescence, Duration::from_millis(2500));
        assert_eq!(cfg.poll_interval, Duration::from_millis(50));
        assert!(!cfg.flush_on_close);
        assert_eq!(cfg.activities, ["Running", "Reading"]);
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("quiescence_ms = \"soon\"").is_err());
    }

    #[test]
    fn synonyms_extend_registry_but_not_canonical_words() {
        let toml = r#"
            [synonyms]
            today = "yesterday"
            ytd = "yesterday"
        "#;

        let fc = Config::parse_file(toml).unwrap();
        assert!(fc.synonyms.is_some());
        Config::load_synonyms(&fc.synonyms);

        assert!(!Keywords::matches(Keyword::Yesterday, "today"));
        assert!(Keywords::matches(Keyword::Yesterday, "ytd"));
    }
}
