//! Custom search API client.
//!
//! Provides a client for a Google-style programmable search API with
//! request validation and response normalization.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://www.googleapis.com/customsearch/v1`
//! - **Authentication**: `key` and `cx` query parameters (API key and
//!   engine id).
//! - **No retry**: a transport or API failure propagates to the caller;
//!   there is no backoff and no partial result.
//! - **Normalization**: the raw `items` array becomes a stable
//!   `SearchResponse`; the raw body is also surfaced so it can be cached
//!   verbatim.

pub mod error;
pub mod request;
pub mod response;

pub use error::GoogleError;
pub use request::{SafeMode, SearchRequest};
pub use response::{GoogleApiResponse, SearchItem, SearchResponse, parse_body};

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header;

/// Default base URL for the search API.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "gather/0.1";

/// Search API client configuration.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// API key.
    pub api_key: String,
    /// Search engine identifier (`cx`).
    pub engine_id: String,
    /// Base URL (default: https://www.googleapis.com).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            engine_id: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GoogleConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads GATHER_API_KEY and GATHER_ENGINE_ID. Returns an error if
    /// either is not set.
    pub fn from_env() -> Result<Self, GoogleError> {
        let api_key = std::env::var("GATHER_API_KEY").map_err(|_| GoogleError::MissingApiKey)?;
        let engine_id = std::env::var("GATHER_ENGINE_ID").map_err(|_| GoogleError::MissingEngineId)?;

        Ok(Self { api_key, engine_id, ..Default::default() })
    }
}

/// Seam over the search call so the executor can be exercised without a
/// live API (call counting, canned bodies).
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Execute a search and return the raw response body.
    async fn search(&self, req: &SearchRequest) -> Result<String, GoogleError>;
}

/// Search API client.
#[derive(Debug, Clone)]
pub struct GoogleClient {
    http: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        if config.api_key.is_empty() {
            return Err(GoogleError::MissingApiKey);
        }
        if config.engine_id.is_empty() {
            return Err(GoogleError::MissingEngineId);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GoogleError::from)?;

        Ok(Self { http, config })
    }

    /// Create a new client from environment variables.
    pub fn from_env() -> Result<Self, GoogleError> {
        Self::new(GoogleConfig::from_env()?)
    }
}

#[async_trait]
impl SearchApi for GoogleClient {
    /// Execute a web search query, returning the raw response body.
    ///
    /// The body is returned untouched so callers can cache it verbatim
    /// and parse it with [`parse_body`].
    async fn search(&self, req: &SearchRequest) -> Result<String, GoogleError> {
        req.validate()?;

        let start = Instant::now();
        let url = format!("{}/customsearch/v1", self.config.base_url);

        tracing::debug!("searching: query={}", req.q);

        let http_response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .query(&[("key", self.config.api_key.as_str()), ("cx", self.config.engine_id.as_str())])
            .query(req)
            .send()
            .await
            .map_err(GoogleError::from)?;

        let status = http_response.status();
        tracing::debug!("search API response status: {}", status);

        if status == 401 || status == 403 {
            return Err(GoogleError::AuthError);
        }

        if status == 429 {
            return Err(GoogleError::QuotaExceeded);
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(GoogleError::HttpError { status: status.as_u16() });
        }

        let body = http_response.text().await.map_err(GoogleError::from)?;

        tracing::debug!("search completed in {:?}, {} bytes", start.elapsed(), body.len());

        Ok(body)
    }
}
