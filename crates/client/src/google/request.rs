//! Search API request types and validation.

use serde::{Deserialize, Serialize};

/// Request parameters for the custom search API.
///
/// Serializes directly into query-string parameters; the API key and
/// engine id are appended by the client, not carried here.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchRequest {
    /// Search query (required).
    pub q: String,

    /// Number of results to return (1-10, API default 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u8>,

    /// 1-based index of the first result (pagination).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,

    /// Safe search: off (default) or active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe: Option<SafeMode>,
}

/// Safe search filtering levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SafeMode {
    Off,
    Active,
}

impl SearchRequest {
    /// Build a request holding only a query, with API defaults elsewhere.
    pub fn for_query(query: impl Into<String>) -> Self {
        Self { q: query.into(), ..Default::default() }
    }

    /// Validate the request parameters.
    ///
    /// Returns an error if any parameters are out of range or malformed.
    pub fn validate(&self) -> Result<(), crate::google::GoogleError> {
        use crate::google::GoogleError;

        if self.q.trim().is_empty() {
            return Err(GoogleError::InvalidQuery("query cannot be empty".to_string()));
        }

        if let Some(num) = self.num
            && !(1..=10).contains(&num)
        {
            return Err(GoogleError::InvalidNum);
        }

        if let Some(start) = self.start
            && !(1..=91).contains(&start)
        {
            return Err(GoogleError::InvalidStart);
        }

        Ok(())
    }

    /// Get the effective num (API default 10).
    pub fn get_num(&self) -> u8 {
        self.num.unwrap_or(10)
    }

    /// Get the effective start index (API default 1).
    pub fn get_start(&self) -> u32 {
        self.start.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::google::GoogleError;

    use super::*;

    #[test]
    fn test_valid_request() {
        let req = SearchRequest { q: "test query".to_string(), num: Some(10), start: Some(1), ..Default::default() };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_query() {
        let req = SearchRequest::for_query("");
        assert!(matches!(req.validate(), Err(GoogleError::InvalidQuery(_))));
    }

    #[test]
    fn test_whitespace_query() {
        let req = SearchRequest::for_query("   ");
        assert!(matches!(req.validate(), Err(GoogleError::InvalidQuery(_))));
    }

    #[test]
    fn test_invalid_num() {
        let req = SearchRequest { q: "test".to_string(), num: Some(11), ..Default::default() };
        assert!(matches!(req.validate(), Err(GoogleError::InvalidNum)));

        let req = SearchRequest { q: "test".to_string(), num: Some(0), ..Default::default() };
        assert!(matches!(req.validate(), Err(GoogleError::InvalidNum)));
    }

    #[test]
    fn test_invalid_start() {
        let req = SearchRequest { q: "test".to_string(), start: Some(0), ..Default::default() };
        assert!(matches!(req.validate(), Err(GoogleError::InvalidStart)));

        let req = SearchRequest { q: "test".to_string(), start: Some(92), ..Default::default() };
        assert!(matches!(req.validate(), Err(GoogleError::InvalidStart)));
    }

    #[test]
    fn test_defaults() {
        let req = SearchRequest::for_query("test");
        assert_eq!(req.get_num(), 10);
        assert_eq!(req.get_start(), 1);
        assert!(req.safe.is_none());
    }

    #[test]
    fn test_query_param_serialization() {
        let req = SearchRequest { q: "rust".to_string(), num: Some(5), safe: Some(SafeMode::Active), ..Default::default() };
        let params = serde_json::to_value(&req).unwrap();
        assert_eq!(params["q"], "rust");
        assert_eq!(params["num"], 5);
        assert_eq!(params["safe"], "active");
        assert!(params.get("start").is_none());
    }
}
