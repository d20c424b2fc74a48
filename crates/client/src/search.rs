//! Query execution with the search cache in front of the live API.
//!
//! Iterative development against a paid search API racks up charges; the
//! executor consults the disk cache first and only goes live on a miss.

use std::sync::Arc;

use gather_core::{DiskCache, Error, cache};

use crate::google::{SafeMode, SearchApi, SearchRequest, SearchResponse, parse_body};

/// Runs search queries through the cache and the live API.
#[derive(Clone)]
pub struct SearchExecutor {
    api: Arc<dyn SearchApi>,
    cache: DiskCache,
}

impl SearchExecutor {
    /// Create an executor over any search API implementation.
    pub fn new(api: Arc<dyn SearchApi>, cache: DiskCache) -> Self {
        Self { api, cache }
    }

    /// Execute a search request.
    ///
    /// Order of resolution:
    /// 1. A cached body that still parses is returned as-is; a corrupt
    ///    entry is treated as a miss, never surfaced.
    /// 2. Otherwise the live API is called; an API failure propagates
    ///    unchanged (no retry, no partial result).
    /// 3. On a live call the raw body is written back to the cache before
    ///    returning.
    pub async fn execute(&self, req: &SearchRequest) -> Result<SearchResponse, Error> {
        req.validate().map_err(Error::from)?;

        let key = cache_key(req);

        if let Some(body) = self.cache.get_search(&key).await {
            match parse_body(&body) {
                Ok(response) => {
                    tracing::debug!("search cache hit: {} ({} items)", key, response.item_count());
                    return Ok(response);
                }
                Err(e) => {
                    tracing::debug!("corrupt search cache entry {}, going live: {}", key, e);
                }
            }
        }

        let body = self.api.search(req).await.map_err(Error::from)?;
        let response = parse_body(&body).map_err(Error::from)?;

        if let Err(e) = self.cache.put_search(&key, &body).await {
            tracing::warn!("failed to cache search response for {}: {}", key, e);
        }

        Ok(response)
    }
}

/// Derive the cache key for a search request.
///
/// Parameters that change the response body (`num`, `start`, `safe`) are
/// folded in; a request at API defaults keeps the plain query key so
/// entries written by earlier runs stay reusable.
fn cache_key(req: &SearchRequest) -> String {
    let safe = req.safe.unwrap_or(SafeMode::Off);
    if req.get_num() == 10 && req.get_start() == 1 && safe == SafeMode::Off {
        return cache::query_key(&req.q);
    }

    let params = serde_json::json!({
        "num": req.get_num(),
        "safe": safe,
        "start": req.get_start(),
    });
    cache::query_params_key(&req.q, &params.to_string())
}
