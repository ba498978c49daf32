//! The core `Journal` struct, providing the primary API for front ends.
use crate::activity::ActivityCatalog;
use crate::calendar::CalendarMonth;
use crate::config::Config;
use crate::date_input::{ParseOptions, resolve_date_token};
use crate::draft::DraftStore;
use crate::storage::{DraftStorage, FileStorage};
use crate::DateKey;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// The central struct for journal operations.
///
/// Holds the configuration and hands out the pieces a front end wires
/// together: the draft store over the journal directory, the activity
/// catalog, and date resolution.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
}

/// Represents a non-critical issue that occurred during a query.
///
/// Reported beside the results instead of aborting the whole query.
#[derive(Debug)]
pub enum QueryError {
    InvalidDate { input: String, error: String },
    FileError { path: PathBuf, error: anyhow::Error },
}

/// A month view plus anything that went wrong while building it.
#[derive(Debug)]
pub struct CalendarResult {
    pub month: Option<CalendarMonth>,
    pub errors: Vec<QueryError>,
}

impl Journal {
    /// Creates a new `Journal` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// This also ensures that the journal's root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.journal_dir)
            .with_context(|| format!("creating {}", config.journal_dir.display()))?;
        Ok(Self { config })
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.config.journal_dir)
    }

    /// A draft store writing into the journal directory, using the configured quiescence.
    pub fn open_drafts(&self) -> DraftStore<FileStorage> {
        DraftStore::new(self.storage(), self.config.quiescence)
    }

    pub fn catalog(&self) -> ActivityCatalog {
        ActivityCatalog::new(self.config.activities.clone())
    }

    /// Resolves a typed date (`yesterday`, `2024-03-15`, ...) against `reference_date`
    /// (today when `None`).
    pub fn resolve_date(&self, token: &str, reference_date: Option<NaiveDate>) -> Option<NaiveDate> {
        let format_strs: Vec<&str> = self
            .config
            .input_date_formats
            .iter()
            .map(AsRef::as_ref)
            .collect();
        let opts = ParseOptions {
            reference_date,
            formats: Some(&format_strs),
        };
        resolve_date_token(token, Some(opts))
    }

    /// Reads the stored draft of one day without opening a view on it.
    pub fn read_draft(&self, key: &DateKey) -> Result<Option<String>> {
        self.storage().load(key)
    }

    /// Lays out the month containing `day`, marking days that have a draft.
    pub fn calendar(&self, day: NaiveDate) -> CalendarResult {
        let mut errors = Vec::new();
        let keys = match self.storage().keys() {
            Ok(keys) => keys,
            Err(error) => {
                errors.push(QueryError::FileError {
                    path: self.config.journal_dir.clone(),
                    error,
                });
                Vec::new()
            }
        };
        let month = CalendarMonth::new(day, &keys);
        if month.is_none() {
            errors.push(QueryError::InvalidDate {
                input: day.to_string(),
                error: "Month is out of range.".to_string(),
            });
        }
        CalendarResult { month, errors }
    }
}
