//! Canonical `YYYY-MM-DD` identifier of one local calendar day.

use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key pattern"));

/// A day identifier that is stable across UTC offsets.
///
/// Two instants that fall on the same local calendar day always produce the
/// same key, whatever offset the viewer is in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Derives the key for the local day of `picked`.
    ///
    /// The instant is shifted by its UTC offset so that the shifted instant,
    /// read in UTC, lands on the same calendar date the user picked.
    pub fn from_local<Tz: TimeZone>(picked: &DateTime<Tz>) -> Option<Self> {
        let offset_ms = i64::from(picked.offset().fix().local_minus_utc()) * 1000;
        let shifted = DateTime::<Utc>::from_timestamp_millis(picked.timestamp_millis() + offset_ms)?;
        Self::from_date(shifted.date_naive())
    }

    /// `None` for years outside `0000..=9999`, which have no four-digit form.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        if !(0..=9999).contains(&date.year()) {
            return None;
        }
        Some(Self(date.format(DATE_KEY_FORMAT).to_string()))
    }

    /// Accepts only the strict canonical form of a real calendar date.
    pub fn parse(s: &str) -> Option<Self> {
        if !DATE_KEY_RE.is_match(s) {
            return None;
        }
        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .ok()
            .and_then(Self::from_date)
    }

    pub fn date(&self) -> NaiveDate {
        // Construction guarantees the canonical form.
        NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT).unwrap_or(NaiveDate::MIN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
