//! A cancellable one-shot timer driven by the caller's event loop.
//!
//! Nothing runs in the background: the owner asks [`Timer::poll`] with the
//! current instant and receives the scheduled action once its deadline has
//! passed. [`Timer::deadline`] tells an event loop how long it may sleep.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Timer<A> {
    pending: Option<(Instant, A)>,
}

impl<A> Default for Timer<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> Timer<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to hand out `action` at `now + delay`.
    ///
    /// A previously scheduled action is dropped and returned.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) -> Option<A> {
        self.pending
            .replace((now + delay, action))
            .map(|(_, previous)| previous)
    }

    /// Disarms the timer, returning the action that will no longer fire.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(_, action)| action)
    }

    /// Returns the action if its deadline is at or before `now`. Fires at most once.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        let due = matches!(&self.pending, Some((deadline, _)) if *deadline <= now);
        if due { self.cancel() } else { None }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
