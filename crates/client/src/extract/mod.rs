//! Remote text extraction via a Tika server.
//!
//! The extraction service takes raw document bytes and answers with a
//! JSON array of metadata records; the readable text lives in the first
//! record's `X-TIKA:content` field. HTML parsing, encoding detection and
//! format support are the service's concern, not this client's.

pub mod normalize;

pub use normalize::clean_text;

use std::time::Duration;

use bytes::Bytes;
use gather_core::Error;

/// Metadata field holding the extracted plain text.
const CONTENT_FIELD: &str = "X-TIKA:content";

/// Client for a Tika extraction server.
#[derive(Debug, Clone)]
pub struct TikaClient {
    http: reqwest::Client,
    base_url: String,
}

impl TikaClient {
    /// Create a client for the server at `base_url` (e.g.
    /// `http://localhost:9998`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url: base_url.into().trim_end_matches('/').to_string() })
    }

    /// Extract plain text from raw document bytes.
    ///
    /// Returns `Ok(None)` when the service answers but reports no
    /// content; transport and protocol failures are errors.
    pub async fn extract(&self, body: Bytes, content_type: Option<&str>) -> Result<Option<String>, Error> {
        let url = format!("{}/rmeta/text", self.base_url);

        let mut request = self
            .http
            .put(&url)
            .header("Accept", "application/json")
            .body(body);
        if let Some(ct) = content_type {
            request = request.header("Content-Type", ct);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout("extraction request timed out".into())
            } else {
                Error::Extract(format!("extraction service unreachable: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Extract(format!("extraction service returned HTTP {}", status.as_u16())));
        }

        let records: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| Error::Extract(format!("malformed extraction response: {}", e)))?;

        Ok(content_from_records(&records))
    }
}

/// Pull the text content out of the service's metadata records.
fn content_from_records(records: &[serde_json::Value]) -> Option<String> {
    let content = records.first()?.get(CONTENT_FIELD)?.as_str()?;
    if content.trim().is_empty() { None } else { Some(content.to_string()) }
}
