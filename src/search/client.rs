//! HTTP client for the ticker search endpoint
//!
//! `GET {endpoint}/search_ticker?query=<url-encoded>` answers with a JSON
//! array of `{symbol, name}` objects.

use std::time::Duration;

use thiserror::Error;

use super::suggestion::Suggestion;

const SEARCH_PATH: &str = "/search_ticker";

/// Errors that can occur while querying the search endpoint
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Transport failure such as a refused connection or a timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Search endpoint returned HTTP {0}")]
    Status(u16),

    /// Body was not a JSON array of suggestions
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Async client for the search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for the given endpoint base URL
    ///
    /// `timeout` bounds the whole request, body included.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Client(e.to_string()))?;

        Ok(Self::with_http_client(http, base_url))
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the search route, without the query string
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// Run one search. The query is URL-encoded by the request builder.
    pub async fn search(&self, query: &str) -> Result<Vec<Suggestion>, SearchError> {
        let response = self
            .http
            .get(self.search_url())
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }
}

/// Decode a response body into suggestions
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
