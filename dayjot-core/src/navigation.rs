//! Typed hand-off from the date picker to the entry view.
//!
//! Consumers receive a [`NavigationEvent`] carrying the [`DateKey`]. The URL
//! form `/Journal?date=YYYY-MM-DD` exists for front ends that route by path;
//! [`Route::parse`] recovers the key from it.

use crate::DateKey;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const JOURNAL_PATH: &str = "/Journal";

static DATE_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|&)date=([^&#]*)").expect("valid query pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Show the journal entry for this day.
    OpenEntry(DateKey),
}

/// Receives navigation requests. Failures are the navigator's concern.
pub trait Navigator {
    fn navigate(&mut self, event: NavigationEvent);
}

impl<F: FnMut(NavigationEvent)> Navigator for F {
    fn navigate(&mut self, event: NavigationEvent) {
        self(event)
    }
}

/// Keeps every event it receives. Handy as a front-end inbox and in tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Vec<NavigationEvent>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&NavigationEvent> {
        self.events.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, event: NavigationEvent) {
        self.events.push(event);
    }
}

/// The entry view's address.
///
/// `date` is `None` when the query string lacked a usable date; the entry
/// view then stays uninitialized instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub date: Option<DateKey>,
}

impl Route {
    /// Parses `/Journal?date=YYYY-MM-DD`. Other paths are not routes at all.
    ///
    /// The date value is percent-decoded before it is checked.
    pub fn parse(url: &str) -> Option<Self> {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        if !path.trim_end_matches('/').eq_ignore_ascii_case(JOURNAL_PATH) {
            return None;
        }
        let date = DATE_PARAM_RE
            .captures(query)
            .and_then(|c| c.get(1))
            .and_then(|m| urlencoding::decode(m.as_str()).ok())
            .and_then(|value| DateKey::parse(&value));
        if date.is_none() {
            tracing::warn!(url, "route without a usable date");
        }
        Some(Self { date })
    }
}

impl From<&NavigationEvent> for Route {
    fn from(event: &NavigationEvent) -> Self {
        match event {
            NavigationEvent::OpenEntry(key) => Route {
                date: Some(key.clone()),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.date {
            Some(date) => write!(f, "{JOURNAL_PATH}?date={date}"),
            None => f.write_str(JOURNAL_PATH),
        }
    }
}
