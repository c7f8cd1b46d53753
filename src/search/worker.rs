//! Search Worker Thread
//!
//! Runs ticker searches in a background thread so the UI never blocks on the
//! network. Requests arrive over a tokio channel and each one is executed as
//! its own task, so a request already sent is never aborted by a newer one.
//! Responses go back to the UI thread over a std channel, tagged with the
//! request id so the UI can ignore answers it no longer cares about.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::{SearchClient, SearchError};
use super::suggestion::Suggestion;

/// A query to run, sent from the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Monotonically increasing id assigned by the UI
    pub request_id: u64,
}

/// Result of a query, sent back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Results {
        request_id: u64,
        suggestions: Vec<Suggestion>,
    },
    Failed {
        request_id: u64,
        error: SearchError,
    },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Results { request_id, .. } => *request_id,
            SearchResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Spawn the search worker thread
///
/// The worker exits once every sender for `request_rx` has been dropped.
/// Searches still in flight at that point are abandoned.
pub fn spawn_worker(
    client: SearchClient,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    })
}

fn worker_loop(
    client: SearchClient,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start search runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                handle_request(&client, request, &response_tx).await;
            });
        }
    });

    log::debug!("Search worker thread shutting down");
}

async fn handle_request(
    client: &SearchClient,
    request: SearchRequest,
    response_tx: &Sender<SearchResponse>,
) {
    let SearchRequest { query, request_id } = request;
    log::debug!("Searching for {:?} (request {})", query, request_id);

    let response = match client.search(&query).await {
        Ok(suggestions) => {
            log::debug!(
                "Request {} returned {} suggestions",
                request_id,
                suggestions.len()
            );
            SearchResponse::Results {
                request_id,
                suggestions,
            }
        }
        Err(error) => SearchResponse::Failed { request_id, error },
    };

    if response_tx.send(response).is_err() {
        // UI thread is gone
        log::debug!("Dropping response for request {}", request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
