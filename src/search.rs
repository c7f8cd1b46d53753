//! Ticker search
//!
//! The `Suggestion` record returned by the search endpoint, the async client
//! that fetches it, and the background worker that runs queries off the UI thread.

pub mod client;
pub mod suggestion;
pub mod worker;

pub use client::{SearchClient, SearchError};
pub use suggestion::{Suggestion, filter_suggestions};
pub use worker::{SearchRequest, SearchResponse, spawn_worker};
