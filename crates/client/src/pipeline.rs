//! End-to-end pipeline: query in, enriched documents out.
//!
//! Composes the search executor and the document builder the way the
//! CLI consumes them. Everything is sequential: one search call, then
//! one document at a time in the order the API returned them.

use std::sync::Arc;

use gather_core::{AppConfig, DiskCache, Error};

use crate::document::{DocumentBuilder, EnrichedDocument};
use crate::extract::TikaClient;
use crate::fetch::{FetchClient, FetchConfig};
use crate::google::{GoogleClient, GoogleConfig, SearchRequest};
use crate::search::SearchExecutor;

/// The assembled search-and-extract pipeline.
pub struct Gather {
    executor: SearchExecutor,
    builder: DocumentBuilder,
}

impl Gather {
    /// Compose a pipeline from pre-built parts.
    pub fn new(executor: SearchExecutor, builder: DocumentBuilder) -> Self {
        Self { executor, builder }
    }

    /// Build the whole pipeline from application configuration.
    ///
    /// Credentials are required here because a live client is
    /// constructed, even though a warm cache might answer the query
    /// without touching the API.
    pub async fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let cache = DiskCache::open(&config.cache_dir, config.cache_enabled).await?;

        let google = GoogleClient::new(GoogleConfig {
            api_key: config
                .require_api_key()
                .map_err(|e| Error::SearchAuth(e.to_string()))?
                .to_string(),
            engine_id: config
                .require_engine_id()
                .map_err(|e| Error::SearchAuth(e.to_string()))?
                .to_string(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            ..Default::default()
        })
        .map_err(Error::from)?;

        let fetch = FetchClient::new(FetchConfig {
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            ..Default::default()
        })?;

        let tika = TikaClient::new(&config.tika_url, config.timeout())?;

        let executor = SearchExecutor::new(Arc::new(google), cache.clone());
        let builder = DocumentBuilder::new(fetch, tika, cache, config.ascii_only);

        Ok(Self::new(executor, builder))
    }

    /// Run a plain query with API-default parameters.
    pub async fn run(&self, query: &str) -> Result<Vec<EnrichedDocument>, Error> {
        self.run_request(SearchRequest::for_query(query)).await
    }

    /// Run a full search request.
    ///
    /// An empty or whitespace-only query short-circuits to an empty
    /// document list; no search call is made. Per-document failures are
    /// recorded in each document's text outcome; only search-level
    /// failures propagate.
    pub async fn run_request(&self, req: SearchRequest) -> Result<Vec<EnrichedDocument>, Error> {
        if req.q.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self.executor.execute(&req).await?;
        tracing::info!("query {:?} returned {} items", req.q, response.item_count());

        let mut documents = Vec::with_capacity(response.items.len());
        for item in &response.items {
            documents.push(self.builder.build(item).await);
        }

        Ok(documents)
    }
}
