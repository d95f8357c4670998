//! Search backend abstraction layer.
//!
//! Provides a trait-based interface for the search API, isolating the
//! concrete HTTP client from the parsing logic.

use serde::Deserialize;

use crate::error::BoxError;

/// Number of results a query asks for unless overridden.
pub const DEFAULT_RESULT_COUNT: usize = 25;

/// A filtered query against the ranked-results search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Field/value filter pairs. Transports send each as a
    /// `filter_{field}` parameter.
    pub filters: Vec<(String, String)>,

    /// Number of results to ask for.
    pub count: usize,
}

impl SearchQuery {
    /// Create a query with a single filter.
    pub fn filtered(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            filters: vec![(field.into(), value.into())],
            count: DEFAULT_RESULT_COUNT,
        }
    }

    /// Add another filter.
    pub fn and_filtered(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Override the number of results to ask for.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// The portion of a search response the parsers consume.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Ranked results, best first
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One ranked search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Result title
    pub title: String,

    /// Path of the result document
    pub link: String,

    /// Content id of the result document, when the index holds one
    #[serde(default)]
    pub content_id: Option<String>,
}

impl SearchResult {
    /// Create a new result.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            content_id: None,
        }
    }
}

/// Abstract interface to the search API.
///
/// Implementations run one query and return the decoded response, without
/// exposing any concrete HTTP client types. Queries issued mid-parse are
/// sequential dependencies of the body being built; there is no retry or
/// timeout at this layer.
pub trait SearchBackend {
    /// Run one query, returning the decoded response.
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse, BoxError>;
}
