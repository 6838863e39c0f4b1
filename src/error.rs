//! Error types for the dashboard worker
//!
//! Uses thiserror for ergonomic error definitions.
//! Transport failures and malformed payloads are distinct kinds so a task
//! can report which boundary actually broke.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard worker errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport errors (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx response from the backend API
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}
