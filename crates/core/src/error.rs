//! Unified error types for gather.
//!
//! One enum covers both failure scopes: errors fatal to a whole query
//! (search API down, bad credentials) and errors scoped to a single
//! document (fetch, extraction), which callers downgrade instead of
//! propagating.

/// Unified error type for the gather pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty query handed to the executor).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// URL failed canonicalization.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// No cache entry found for the given key.
    #[error("cache miss: {0}")]
    CacheMiss(String),

    /// Cache file could not be read or written.
    #[error("cache I/O error: {0}")]
    Cache(#[from] std::io::Error),

    /// Network-level failure (connect, DNS, TLS, mid-body).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from a page fetch.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Request hit the configured timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Response body exceeded the configured size cap.
    #[error("response too large: {0}")]
    TooLarge(String),

    /// Search API rejected the credentials.
    #[error("search auth error: {0}")]
    SearchAuth(String),

    /// Search API quota exhausted.
    #[error("search quota exceeded: {0}")]
    SearchQuota(String),

    /// Any other search API failure.
    #[error("search API error: {0}")]
    SearchApi(String),

    /// Extraction service failure.
    #[error("extraction failed: {0}")]
    Extract(String),

    /// Response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Whether this error is fatal to the whole query rather than scoped
    /// to a single document.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::SearchAuth(_) | Error::SearchQuota(_) | Error::SearchApi(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CacheMiss("q-abc".to_string());
        assert!(err.to_string().contains("cache miss"));
        assert!(err.to_string().contains("q-abc"));

        let err = Error::HttpStatus(404);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_fatal_classification() {
        assert!(Error::SearchAuth("bad key".into()).is_fatal());
        assert!(Error::SearchQuota("daily limit".into()).is_fatal());
        assert!(!Error::HttpStatus(500).is_fatal());
        assert!(!Error::Extract("no content".into()).is_fatal());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Cache(_)));
    }
}
