//! Client code for gather.
//!
//! This crate provides the search API client, the page fetch and
//! extraction pipeline, and the glue composing them into a
//! query-to-documents run.

pub mod document;
pub mod extract;
pub mod fetch;
pub mod google;
pub mod pipeline;
pub mod search;

pub use document::{DocumentBuilder, EnrichedDocument, PageText};
pub use extract::{TikaClient, clean_text};
pub use fetch::{FetchClient, FetchConfig, FetchResponse, canonicalize};
pub use google::{GoogleClient, GoogleConfig, SafeMode, SearchApi, SearchItem, SearchRequest, SearchResponse};
pub use pipeline::Gather;
pub use search::SearchExecutor;
