//! Enriched documents: search result metadata plus extracted page text.
//!
//! The builder resolves text through the page cache, the fetch client and
//! the extraction service in that order. Failures here are scoped to one
//! document; they are logged and recorded in the outcome, never raised.

use gather_core::{DiskCache, cache};

use crate::extract::{TikaClient, clean_text};
use crate::fetch::{FetchClient, canonicalize};
use crate::google::SearchItem;

/// Outcome of resolving a page's text.
///
/// Distinguishes a genuinely empty document from one whose fetch or
/// extraction failed; both read as `""` through [`PageText::as_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageText {
    /// Non-empty normalized text.
    Extracted(String),
    /// The item had no link, or extraction legitimately produced nothing.
    Empty,
    /// Fetch or extraction failed; the reason is kept for diagnostics.
    Unavailable(String),
}

impl PageText {
    /// The text content, `""` for empty and unavailable pages.
    pub fn as_str(&self) -> &str {
        match self {
            PageText::Extracted(text) => text,
            PageText::Empty | PageText::Unavailable(_) => "",
        }
    }

    /// Whether text was actually extracted.
    pub fn is_extracted(&self) -> bool {
        matches!(self, PageText::Extracted(_))
    }
}

/// A search result enriched with the linked page's readable text.
///
/// Constructed once from a [`SearchItem`]; the URL is its identity key.
#[derive(Debug, Clone)]
pub struct EnrichedDocument {
    /// Result title.
    pub title: String,
    /// Abbreviated display form of the result's host.
    pub display_link: String,
    /// Complete URL of the result (identity key).
    pub url: String,
    /// Search API snippet.
    pub snippet: String,
    /// Extracted page text.
    pub text: PageText,
}

/// Builds enriched documents from raw search result items.
pub struct DocumentBuilder {
    fetch: FetchClient,
    tika: TikaClient,
    cache: DiskCache,
    ascii_only: bool,
}

impl DocumentBuilder {
    /// Create a builder over the given fetch client, extraction client
    /// and page cache.
    pub fn new(fetch: FetchClient, tika: TikaClient, cache: DiskCache, ascii_only: bool) -> Self {
        Self { fetch, tika, cache, ascii_only }
    }

    /// Build the enriched document for one result item.
    ///
    /// Never fails: per-document fetch and extraction problems degrade to
    /// [`PageText::Unavailable`] so the rest of the batch proceeds.
    pub async fn build(&self, item: &SearchItem) -> EnrichedDocument {
        let text = self.scrape(&item.link).await;

        EnrichedDocument {
            title: item.title.clone(),
            display_link: item.display_link.clone(),
            url: item.link.clone(),
            snippet: item.snippet.clone(),
            text,
        }
    }

    /// Resolve the text for one link: cache, then fetch + extraction.
    async fn scrape(&self, link: &str) -> PageText {
        if link.trim().is_empty() {
            return PageText::Empty;
        }

        let url = match canonicalize(link) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("skipping malformed result link {:?}: {}", link, e);
                return PageText::Unavailable(e.to_string());
            }
        };

        let key = cache::page_key(url.as_str());
        if let Some(text) = self.cache.get_page(&key).await {
            return PageText::Extracted(text);
        }

        let page = match self.fetch.fetch(url.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("failed to fetch {}: {}", url, e);
                return PageText::Unavailable(e.to_string());
            }
        };

        let content = match self.tika.extract(page.bytes, page.content_type.as_deref()).await {
            Ok(Some(content)) => content,
            Ok(None) => return PageText::Empty,
            Err(e) => {
                tracing::warn!("failed to extract text from {}: {}", url, e);
                return PageText::Unavailable(e.to_string());
            }
        };

        let text = clean_text(&content, self.ascii_only);
        if text.is_empty() {
            return PageText::Empty;
        }

        if let Err(e) = self.cache.put_page(&key, &text).await {
            tracing::warn!("failed to cache page text for {}: {}", url, e);
        }

        PageText::Extracted(text)
    }
}

#[cfg(test)]
mod tests {
    use gather_core::cache::page_key;

    use super::*;
    use crate::extract::TikaClient;
    use crate::fetch::{FetchClient, FetchConfig};

    fn item(link: &str) -> SearchItem {
        SearchItem {
            title: "Title".into(),
            display_link: "example.com".into(),
            link: link.into(),
            snippet: "Snippet".into(),
        }
    }

    fn builder(cache: DiskCache) -> DocumentBuilder {
        let fetch = FetchClient::new(FetchConfig::default()).unwrap();
        let tika = TikaClient::new("http://127.0.0.1:9", std::time::Duration::from_secs(2)).unwrap();
        DocumentBuilder::new(fetch, tika, cache, false)
    }

    #[test]
    fn test_page_text_as_str() {
        assert_eq!(PageText::Extracted("body".into()).as_str(), "body");
        assert_eq!(PageText::Empty.as_str(), "");
        assert_eq!(PageText::Unavailable("reason".into()).as_str(), "");
        assert!(PageText::Extracted("body".into()).is_extracted());
        assert!(!PageText::Unavailable("reason".into()).is_extracted());
    }

    #[tokio::test]
    async fn test_empty_link_is_empty_text_without_any_call() {
        let doc = builder(DiskCache::disabled()).build(&item("")).await;
        assert_eq!(doc.text, PageText::Empty);
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.url, "");
    }

    #[tokio::test]
    async fn test_metadata_copied_from_item() {
        let doc = builder(DiskCache::disabled()).build(&item("")).await;
        assert_eq!(doc.display_link, "example.com");
        assert_eq!(doc.snippet, "Snippet");
    }

    #[tokio::test]
    async fn test_cached_page_short_circuits_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::open(dir.path(), true).await.unwrap();

        // The link points at a closed port; only the cache can satisfy it.
        let link = "http://127.0.0.1:9/cached-page";
        let canonical = canonicalize(link).unwrap();
        cache.put_page(&page_key(canonical.as_str()), "cached text").await.unwrap();

        let doc = builder(cache).build(&item(link)).await;
        assert_eq!(doc.text, PageText::Extracted("cached text".into()));
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_unavailable() {
        let doc = builder(DiskCache::disabled()).build(&item("http://127.0.0.1:9/down")).await;
        assert!(matches!(doc.text, PageText::Unavailable(_)));
        assert_eq!(doc.text.as_str(), "");
    }

    #[tokio::test]
    async fn test_malformed_link_degrades_to_unavailable() {
        let doc = builder(DiskCache::disabled()).build(&item("::not a url::")).await;
        assert!(matches!(doc.text, PageText::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_one_bad_url_does_not_block_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::open(dir.path(), true).await.unwrap();

        let good = "http://127.0.0.1:9/good";
        cache
            .put_page(&page_key(canonicalize(good).unwrap().as_str()), "good text")
            .await
            .unwrap();

        let b = builder(cache);
        let items = [item("http://127.0.0.1:9/bad"), item(good), item("")];
        let mut docs = Vec::new();
        for i in &items {
            docs.push(b.build(i).await);
        }

        assert_eq!(docs.len(), 3);
        assert!(matches!(docs[0].text, PageText::Unavailable(_)));
        assert_eq!(docs[1].text, PageText::Extracted("good text".into()));
        assert_eq!(docs[2].text, PageText::Empty);
    }
}
