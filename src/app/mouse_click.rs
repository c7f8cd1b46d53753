//! Mouse click handling
//!
//! Routes left clicks to the control under the pointer. Terminals only report
//! single presses, so double clicks are recognised here from timing.

use std::time::{Duration, Instant};

use super::app_state::{App, Focus};
use crate::layout::Region;
use crate::password::toggle_visibility;

/// Two presses on the same control within this window form a double click
pub const DOUBLE_CLICK_MS: u64 = 400;

#[derive(Debug)]
pub struct ClickTracker {
    last: Option<(Region, Instant)>,
    threshold: Duration,
}

impl ClickTracker {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            last: None,
            threshold: Duration::from_millis(threshold_ms),
        }
    }

    /// Record a press on `region`. Returns true if it completes a double click.
    pub fn register(&mut self, region: Option<Region>, now: Instant) -> bool {
        let is_double = match (self.last, region) {
            (Some((previous, at)), Some(current)) => {
                previous == current && now.saturating_duration_since(at) <= self.threshold
            }
            _ => false,
        };

        // A completed double click starts a fresh sequence
        self.last = if is_double {
            None
        } else {
            region.map(|r| (r, now))
        };
        is_double
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_MS)
    }
}

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    let is_double = app.click_tracker.register(region, now);

    match region {
        Some(Region::TickerInput) => click_ticker_input(app, is_double),
        Some(Region::Suggestion(index)) => app.select_suggestion(index),
        // Inside the panel but not on a row: keep it open
        Some(Region::SuggestionsPanel) => {}
        Some(Region::PasswordInput) => app.set_focus(Focus::Password),
        Some(Region::PasswordToggle) => {
            app.autocomplete.hide();
            toggle_visibility(&mut app.password);
        }
        // Click-away dismissal
        None => app.autocomplete.hide(),
    }
}

fn click_ticker_input(app: &mut App, is_double: bool) {
    app.focus = Focus::Ticker;

    if is_double {
        app.clear_ticker();
        return;
    }

    // Handled here, so it never counts as a click outside the panel
    let value = app.input.value().to_string();
    app.autocomplete.on_input_click(&value);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
