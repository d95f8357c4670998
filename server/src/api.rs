//! Blocking HTTP clients for the GOV.UK content and search APIs.

use govpher::{BoxError, SearchBackend, SearchQuery, SearchResponse};
use serde_json::Value;

/// Content API serving raw content items.
pub const DEFAULT_CONTENT_API: &str = "https://www.gov.uk/api/content";

/// Search API serving ranked results.
pub const DEFAULT_SEARCH_API: &str = "https://www.gov.uk/api/search.json";

/// Client for the two upstream APIs. Requests are blocking; the server
/// runs them on blocking worker threads.
pub struct GovukClient {
    http: reqwest::blocking::Client,
    content_endpoint: String,
    search_endpoint: String,
}

impl GovukClient {
    /// Create a client against the given API endpoints.
    pub fn new(
        content_endpoint: impl Into<String>,
        search_endpoint: impl Into<String>,
    ) -> reqwest::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("govpherd/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            content_endpoint: content_endpoint.into(),
            search_endpoint: search_endpoint.into(),
        })
    }

    /// Fetch one raw content item, interpreting the response as JSON and
    /// nothing more. Upstream error bodies come back as whatever JSON
    /// they carry; the parser classifies them by shape.
    pub fn fetch_content(&self, base_path: &str) -> reqwest::Result<Value> {
        let url = format!(
            "{}{}",
            self.content_endpoint.trim_end_matches('/'),
            base_path
        );
        self.http.get(url).send()?.json()
    }
}

impl SearchBackend for GovukClient {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse, BoxError> {
        let mut params: Vec<(String, String)> = query
            .filters
            .iter()
            .map(|(field, value)| (format!("filter_{field}"), value.clone()))
            .collect();
        params.push(("count".to_string(), query.count.to_string()));

        let response = self
            .http
            .get(&self.search_endpoint)
            .query(&params)
            .send()
            .map_err(BoxError::from)?;
        response.json::<SearchResponse>().map_err(BoxError::from)
    }
}
