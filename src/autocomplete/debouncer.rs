//! Debouncing for ticker searches
//!
//! Holds at most one scheduled query. Scheduling again replaces it, so a burst
//! of keystrokes collapses into a single search fired once typing pauses.

use std::time::{Duration, Instant};

/// Idle delay used when the config does not override it
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledQuery {
    query: String,
    fire_at: Instant,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    scheduled: Option<ScheduledQuery>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            scheduled: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `query` to fire `delay` after `now`, replacing any pending query
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.scheduled = Some(ScheduledQuery {
            query,
            fire_at: now + self.delay,
        });
    }

    pub fn cancel(&mut self) {
        self.scheduled = None;
    }

    pub fn is_pending(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Take the pending query if its deadline has been reached
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        let due = self
            .scheduled
            .as_ref()
            .is_some_and(|scheduled| now >= scheduled.fire_at);
        if !due {
            return None;
        }
        self.scheduled.take().map(|s| s.query)
    }

    /// Time left before the pending query fires, if any
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.scheduled
            .as_ref()
            .map(|s| s.fire_at.saturating_duration_since(now))
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
