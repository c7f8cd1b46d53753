use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use super::mouse_click::ClickTracker;
use crate::alert::AlertState;
use crate::autocomplete::AutocompleteState;
use crate::config::{Config, SearchConfig};
use crate::error::TickrError;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::password::PasswordField;
use crate::search::{SearchClient, spawn_worker};

/// Shown when the form is submitted without a ticker
pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a ticker symbol";

/// Longest the event loop waits for input before checking timers and responses
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Ticker,
    Password,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub password: PasswordField,
    pub autocomplete: AutocompleteState,
    pub alert: AlertState,
    pub focus: Focus,
    pub layout_regions: LayoutRegions,
    pub click_tracker: ClickTracker,
    pub max_visible_suggestions: usize,
    /// Problem with the config file, shown in the help line
    pub config_warning: Option<String>,
    pub should_quit: bool,
    /// Ticker line to print on exit, set by a successful submit
    pub output: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            password: PasswordField::new(),
            autocomplete: AutocompleteState::new(config.search.debounce_ms),
            alert: AlertState::new(),
            focus: Focus::Ticker,
            layout_regions: LayoutRegions::new(),
            click_tracker: ClickTracker::default(),
            max_visible_suggestions: config.ui.max_visible_suggestions,
            config_warning: None,
            should_quit: false,
            output: None,
        }
    }

    /// Start the search worker and wire it to the autocomplete controller
    ///
    /// The worker stops on its own once the app is dropped.
    pub fn start_search(&mut self, config: &SearchConfig) -> Result<JoinHandle<()>, TickrError> {
        let client = SearchClient::new(
            &config.endpoint,
            Duration::from_millis(config.timeout_ms),
        )?;

        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        let handle = spawn_worker(client, request_rx, response_tx);
        self.autocomplete.connect(request_tx, response_rx);
        log::info!("Searching tickers via {}", config.endpoint);
        Ok(handle)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current ticker input text
    pub fn ticker(&self) -> &str {
        self.input.value()
    }

    /// Fire due searches and apply finished ones
    pub fn tick(&mut self, now: Instant) {
        self.autocomplete.tick(now);
    }

    /// How long the event loop may block waiting for terminal input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.autocomplete
            .time_until_due(now)
            .map_or(MAX_POLL_INTERVAL, |due| due.min(MAX_POLL_INTERVAL))
    }

    /// Ticker text changed through typing
    pub fn on_ticker_edited(&mut self, now: Instant) {
        let value = self.input.value().to_string();
        self.autocomplete.on_input(&value, now);
    }

    /// Fill the input from the suggestion on row `index`
    pub fn select_suggestion(&mut self, index: usize) {
        if let Some(selection) = self.autocomplete.on_suggestion_click(index) {
            self.input.set_value(&selection);
        }
    }

    /// Double click on the ticker input: clear it, unless it is already empty
    pub fn clear_ticker(&mut self) {
        if self.input.value().is_empty() {
            return;
        }
        self.input.clear();
        self.autocomplete.on_cleared();
    }

    /// Submit the form. Returns false when submission was blocked.
    pub fn submit(&mut self) -> bool {
        if self.input.is_blank() {
            self.alert.show(EMPTY_TICKER_MESSAGE);
            return false;
        }

        self.autocomplete.hide();
        self.output = Some(self.input.value().trim().to_string());
        self.should_quit = true;
        true
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus != Focus::Ticker {
            self.autocomplete.invalidate();
            self.autocomplete.hide();
        }
        self.focus = focus;
    }

    pub fn cycle_focus(&mut self) {
        let next = match self.focus {
            Focus::Ticker => Focus::Password,
            Focus::Password => Focus::Ticker,
        };
        self.set_focus(next);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
