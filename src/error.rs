use thiserror::Error;

use crate::search::SearchError;

/// Custom error types for tickr
#[derive(Debug, Error)]
pub enum TickrError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
