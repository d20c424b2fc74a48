//! Search API client error types.

use std::sync::Arc;

use gather_core::Error;

/// Errors from the custom search API client.
#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    /// Missing API key.
    #[error("missing API key: GATHER_API_KEY not set")]
    MissingApiKey,

    /// Missing search engine identifier.
    #[error("missing engine id: GATHER_ENGINE_ID not set")]
    MissingEngineId,

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid num parameter (must be 1-10).
    #[error("invalid num: must be 1-10")]
    InvalidNum,

    /// Invalid start parameter (must be 1-91).
    #[error("invalid start: must be 1-91")]
    InvalidStart,

    /// Authentication failed (invalid API key or engine id).
    #[error("authentication failed: key or engine id rejected")]
    AuthError,

    /// Daily quota or rate limit exhausted.
    #[error("quota exceeded: too many requests")]
    QuotaExceeded,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GoogleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { GoogleError::Timeout } else { GoogleError::Network(Arc::new(err)) }
    }
}

impl From<GoogleError> for Error {
    fn from(err: GoogleError) -> Self {
        match err {
            GoogleError::MissingApiKey | GoogleError::MissingEngineId | GoogleError::AuthError => {
                Error::SearchAuth(err.to_string())
            }
            GoogleError::QuotaExceeded => Error::SearchQuota(err.to_string()),
            GoogleError::InvalidQuery(msg) => Error::InvalidInput(msg),
            GoogleError::InvalidNum | GoogleError::InvalidStart => Error::InvalidInput(err.to_string()),
            GoogleError::Timeout => Error::Timeout(err.to_string()),
            GoogleError::Network(e) => Error::Transport(e.to_string()),
            GoogleError::HttpError { status } => Error::SearchApi(format!("HTTP {status}")),
            GoogleError::Parse(msg) => Error::Parse(msg),
        }
    }
}
