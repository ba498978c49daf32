//! The Draft Store: loads the draft of one day and persists edits once the
//! user has stopped typing for a full quiescence period.

use crate::DateKey;
use crate::storage::DraftStorage;
use crate::timer::Timer;
use anyhow::Result;
use std::time::{Duration, Instant};

pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(1000);

/// A write waiting for the quiescence timer.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingWrite {
    key: DateKey,
    content: String,
}

/// Binds editor content to a [`DateKey`] and debounces writes into `S`.
///
/// The store is passive: the owning event loop feeds it edits and calls
/// [`poll`](Self::poll) with the current instant, and the write happens inside
/// that call once the timer has expired.
#[derive(Debug)]
pub struct DraftStore<S> {
    storage: S,
    quiescence: Duration,
    date: Option<DateKey>,
    content: String,
    timer: Timer<PendingWrite>,
}

impl<S: DraftStorage> DraftStore<S> {
    pub fn new(storage: S, quiescence: Duration) -> Self {
        Self {
            storage,
            quiescence,
            date: None,
            content: String::new(),
            timer: Timer::new(),
        }
    }

    /// Activates the view for `date`, loading its stored draft.
    ///
    /// Any write still pending for a previously opened day is discarded.
    /// With `None` the store stays uninitialized: no date, empty content, and
    /// later edits are kept in memory only.
    pub fn open(&mut self, date: Option<DateKey>) -> Result<&str> {
        self.close();
        let Some(key) = date else {
            tracing::warn!("no date to open, draft will not be persisted");
            return Ok(&self.content);
        };

        let stored = self.storage.load(&key)?;
        tracing::info!(date = %key, existing = stored.is_some(), "opened draft");
        self.content = stored.unwrap_or_default();
        self.date = Some(key);
        Ok(&self.content)
    }

    /// Replaces the content with the editor's latest full text.
    ///
    /// The in-memory content changes immediately. The write is (re)scheduled
    /// for `now + quiescence`, replacing any write still waiting.
    pub fn edit(&mut self, content: impl Into<String>, now: Instant) {
        self.content = content.into();
        let Some(key) = &self.date else {
            return;
        };
        let write = PendingWrite {
            key: key.clone(),
            content: self.content.clone(),
        };
        if self.timer.schedule(now, self.quiescence, write).is_some() {
            tracing::debug!(date = %key, "debounce restarted");
        }
    }

    /// Performs the pending write if the quiescence period has elapsed.
    ///
    /// Returns the key that was written. Storage errors are returned as-is.
    pub fn poll(&mut self, now: Instant) -> Result<Option<DateKey>> {
        match self.timer.poll(now) {
            Some(write) => self.persist(write).map(Some),
            None => Ok(None),
        }
    }

    /// Writes the pending content right away, without waiting for the timer.
    pub fn flush(&mut self) -> Result<Option<DateKey>> {
        match self.timer.cancel() {
            Some(write) => self.persist(write).map(Some),
            None => Ok(None),
        }
    }

    /// Tears the view down. A write still waiting for the timer is dropped.
    ///
    /// Returns `true` if a pending write was discarded.
    pub fn close(&mut self) -> bool {
        let discarded = self.timer.cancel();
        if let Some(write) = &discarded {
            tracing::warn!(date = %write.key, "closing with unsaved changes");
        }
        self.date = None;
        self.content.clear();
        discarded.is_some()
    }

    pub fn date(&self) -> Option<&DateKey> {
        self.date.as_ref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the next write is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn has_pending_write(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, write: PendingWrite) -> Result<DateKey> {
        self.storage.save(&write.key, &write.content)?;
        tracing::info!(date = %write.key, bytes = write.content.len(), "draft saved");
        Ok(write.key)
    }
}
