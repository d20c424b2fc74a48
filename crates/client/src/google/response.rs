//! Search API response types and normalization.

use serde::{Deserialize, Serialize};

use crate::google::GoogleError;

/// Raw response from the custom search API.
///
/// Only the fields the pipeline consumes are modeled; the API returns
/// many more (queries, context, spelling) that are carried opaquely in
/// the cached body but never read.
#[derive(Debug, Deserialize)]
pub struct GoogleApiResponse {
    #[serde(default)]
    pub queries: Option<Queries>,
    #[serde(default, rename = "searchInformation")]
    pub search_information: Option<SearchInformation>,
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}

/// Query echo metadata from the API.
#[derive(Debug, Deserialize)]
pub struct Queries {
    #[serde(default)]
    pub request: Vec<QueryRequest>,
}

/// One request descriptor inside the query echo.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The query as the API understood it.
    #[serde(default, rename = "searchTerms")]
    pub search_terms: Option<String>,
}

/// Result-count metadata from the API.
#[derive(Debug, Deserialize)]
pub struct SearchInformation {
    /// Estimated total result count; the API reports it as a string.
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<String>,
}

/// One entry of the API's `items` array.
///
/// All four fields are required; an item missing any of them fails
/// deserialization and with it the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    /// Result title.
    pub title: String,
    /// Abbreviated display form of the result's host.
    #[serde(rename = "displayLink")]
    pub display_link: String,
    /// Complete URL of the result.
    pub link: String,
    /// Short excerpt of the page around the match.
    pub snippet: String,
}

/// Normalized search response for internal use.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Result items in API order.
    pub items: Vec<SearchItem>,
    /// The original query as echoed by the API; empty when not reported.
    pub query: String,
    /// Estimated total result count, when the API reported one.
    pub total_results: Option<u64>,
}

impl From<GoogleApiResponse> for SearchResponse {
    fn from(raw: GoogleApiResponse) -> Self {
        let query = raw
            .queries
            .and_then(|q| q.request.into_iter().next())
            .and_then(|r| r.search_terms)
            .unwrap_or_default();
        let total_results = raw
            .search_information
            .and_then(|info| info.total_results)
            .and_then(|s| s.parse().ok());
        SearchResponse { items: raw.items.unwrap_or_default(), query, total_results }
    }
}

impl SearchResponse {
    /// Get the number of result items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Parse a raw response body into the normalized form.
///
/// Used on both live bodies and cached ones; a cached body that no longer
/// parses is treated as a miss by the executor.
pub fn parse_body(body: &str) -> Result<SearchResponse, GoogleError> {
    let raw: GoogleApiResponse = serde_json::from_str(body).map_err(|e| GoogleError::Parse(e.to_string()))?;
    Ok(raw.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "queries": { "request": [{ "searchTerms": "illustrative examples" }] },
        "searchInformation": { "totalResults": "2410000" },
        "items": [
            {
                "title": "Example Domain",
                "displayLink": "example.com",
                "link": "https://example.com/",
                "snippet": "This domain is for use in illustrative examples"
            },
            {
                "title": "Test Page",
                "displayLink": "test.com",
                "link": "https://test.com/page",
                "snippet": "A test page"
            }
        ]
    }"#;

    #[test]
    fn test_parse_fixture() {
        let response = parse_body(FIXTURE_JSON).unwrap();
        assert_eq!(response.item_count(), 2);
        assert_eq!(response.query, "illustrative examples");
        assert_eq!(response.total_results, Some(2_410_000));

        let first = &response.items[0];
        assert_eq!(first.title, "Example Domain");
        assert_eq!(first.display_link, "example.com");
        assert_eq!(first.link, "https://example.com/");
        assert_eq!(first.snippet, "This domain is for use in illustrative examples");
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response = parse_body(r#"{"searchInformation": {"totalResults": "0"}}"#).unwrap();
        assert_eq!(response.item_count(), 0);
        assert_eq!(response.query, "");
        assert_eq!(response.total_results, Some(0));
    }

    #[test]
    fn test_item_missing_required_field_fails() {
        // No snippet on the single item.
        let body = r#"{"items": [{"title": "t", "displayLink": "d", "link": "https://example.com"}]}"#;
        let result = parse_body(body);
        assert!(matches!(result, Err(GoogleError::Parse(_))));
    }

    #[test]
    fn test_malformed_body_fails() {
        assert!(matches!(parse_body("not json"), Err(GoogleError::Parse(_))));
    }

    #[test]
    fn test_unparseable_total_results_is_none() {
        let body = r#"{"searchInformation": {"totalResults": "lots"}}"#;
        let response = parse_body(body).unwrap();
        assert!(response.total_results.is_none());
    }
}
