//! Autocomplete controller state
//!
//! Turns edits of the ticker input into debounced searches and tracks the
//! suggestions panel. Only the latest dispatched request may update the panel.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::debouncer::Debouncer;
use crate::search::{SearchRequest, SearchResponse, Suggestion, filter_suggestions};

pub struct AutocompleteState {
    /// Whether the suggestions panel is shown
    visible: bool,
    /// Rows of the panel, already filtered, in endpoint order
    suggestions: Vec<Suggestion>,
    debouncer: Debouncer,
    /// Channel to send requests to the search worker
    request_tx: Option<UnboundedSender<SearchRequest>>,
    /// Channel to receive responses from the search worker
    response_rx: Option<Receiver<SearchResponse>>,
    /// Id of the most recently dispatched request (0 = none yet)
    request_id: u64,
}

impl AutocompleteState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            visible: false,
            suggestions: Vec::new(),
            debouncer: Debouncer::new(debounce_ms),
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Attach the channels of a running search worker
    pub fn connect(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn latest_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_query_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// React to the ticker input changing under the user's hands
    pub fn on_input(&mut self, raw_text: &str, now: Instant) {
        self.debouncer.cancel();

        let query = raw_text.trim();
        if query.is_empty() {
            self.invalidate();
            self.hide();
            return;
        }

        self.debouncer.schedule(query.to_string(), now);
    }

    /// Input was cleared by a reset gesture: drop any scheduled search too
    pub fn on_cleared(&mut self) {
        self.debouncer.cancel();
        self.invalidate();
        self.hide();
    }

    /// Click landed on the ticker input itself
    pub fn on_input_click(&mut self, input_text: &str) {
        if !input_text.trim().is_empty() && !self.suggestions.is_empty() {
            self.show();
        }
    }

    /// Pick the suggestion on row `index`, returning the text for the input
    pub fn on_suggestion_click(&mut self, index: usize) -> Option<String> {
        let selection = self.suggestions.get(index)?.selection_text();
        self.debouncer.cancel();
        self.invalidate();
        self.hide();
        Some(selection)
    }

    /// Make every search already sent stale without sending a new one
    ///
    /// Answers still in flight are then dropped by `handle_response`.
    pub fn invalidate(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
    }

    /// Advance time: fire a due search and apply any responses that arrived
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.take_due(now) {
            self.execute_query(query);
        }
        self.poll_responses();
    }

    /// How long the event loop may sleep before `tick` has work to do
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Dispatch a search to the worker under a fresh request id
    pub fn execute_query(&mut self, query: String) {
        self.request_id = self.request_id.wrapping_add(1);
        let request = SearchRequest {
            query,
            request_id: self.request_id,
        };

        let Some(tx) = &self.request_tx else {
            log::warn!(
                "Search worker not connected, dropping request {}",
                request.request_id
            );
            return;
        };

        if tx.send(request).is_err() {
            log::error!("Search error: worker is no longer running");
            self.request_tx = None;
            self.hide();
        }
    }

    /// Drain every response the worker has produced so far
    pub fn poll_responses(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };

        let mut responses = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    break;
                }
            }
        }

        for response in responses {
            self.handle_response(response);
        }
    }

    /// Apply one worker response to the panel
    pub fn handle_response(&mut self, response: SearchResponse) {
        if response.request_id() != self.request_id {
            log::debug!(
                "Ignoring stale response {} (latest: {})",
                response.request_id(),
                self.request_id
            );
            return;
        }

        match response {
            SearchResponse::Results { suggestions, .. } => {
                self.suggestions = filter_suggestions(suggestions);
                self.visible = !self.suggestions.is_empty();
            }
            SearchResponse::Failed { error, .. } => {
                log::error!("Search error: {}", error);
                self.hide();
            }
        }
    }

    #[cfg(test)]
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.visible = !self.suggestions.is_empty();
    }
}

impl Default for AutocompleteState {
    fn default() -> Self {
        Self::new(super::DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
