//! Content item parsing: a registry of per-type extraction rules.
//!
//! The content API describes every page as a "content item" whose
//! `document_type` decides the shape of its details hash. This module
//! dispatches each raw item to the extraction rule registered for its
//! type and assembles the normalized [`Document`].
//!
//! # Example
//!
//! ```
//! use govpher::parser::{ParserRegistry, SearchBackend, SearchQuery, SearchResponse};
//! use serde_json::json;
//!
//! struct NoSearch;
//!
//! impl SearchBackend for NoSearch {
//!     fn search(&self, _query: &SearchQuery) -> Result<SearchResponse, govpher::BoxError> {
//!         Ok(SearchResponse::default())
//!     }
//! }
//!
//! fn main() -> govpher::Result<()> {
//!     let registry = ParserRegistry::with_defaults();
//!     let document = registry.parse(
//!         &json!({
//!             "document_type": "answer",
//!             "title": "UK bank holidays",
//!             "public_updated_at": "2019-08-07T10:00:00Z",
//!             "details": { "body": "<p>Find out when the bank holidays are.</p>" },
//!         }),
//!         &NoSearch,
//!     )?;
//!     assert_eq!(document.title, "UK bank holidays");
//!     Ok(())
//! }
//! ```

mod backend;
mod browse;
mod details;
mod organisation;

pub use backend::{
    SearchBackend, SearchQuery, SearchResponse, SearchResult, DEFAULT_RESULT_COUNT,
};
pub use browse::{parse_mainstream_browse_page, parse_taxon};
pub use details::{parse_guide, parse_prose, parse_transaction};
pub use organisation::parse_organisation;

use serde_json::{Map, Value};

use crate::error::{Error, ParseError, Result};
use crate::model::{link_entries, Document, LinkGraph, MarkupElement, RawLink};

/// An extraction rule: turns a details hash into a body, with the
/// envelope and search backend available through the context.
pub type DetailsParser =
    fn(&Value, &ParseContext<'_>) -> std::result::Result<Vec<MarkupElement>, ParseError>;

/// Shared state handed to each extraction rule: the raw envelope, for the
/// few types that read beyond their details hash, and the search backend
/// for dependent queries.
pub struct ParseContext<'a> {
    raw: &'a Value,
    backend: &'a dyn SearchBackend,
}

impl<'a> ParseContext<'a> {
    /// Create a context over one raw content item.
    pub fn new(raw: &'a Value, backend: &'a dyn SearchBackend) -> Self {
        Self { raw, backend }
    }

    /// The envelope's own path.
    pub fn base_path(&self) -> std::result::Result<&'a str, ParseError> {
        required_str(self.raw, "base_path")
    }

    /// The envelope's content id.
    pub fn content_id(&self) -> std::result::Result<&'a str, ParseError> {
        required_str(self.raw, "content_id")
    }

    /// One relation list off the envelope's links hash. Absent relations
    /// are empty.
    pub fn links(&self, relation: &str) -> std::result::Result<Vec<RawLink>, ParseError> {
        match self.raw.get("links") {
            Some(links) => link_entries(links, relation),
            None => Ok(Vec::new()),
        }
    }

    /// Run a dependent search query.
    pub fn search(&self, query: &SearchQuery) -> std::result::Result<SearchResponse, ParseError> {
        self.backend.search(query).map_err(ParseError::Search)
    }
}

/// Registry mapping document types to extraction rules.
///
/// Constructed once at startup; lookups dispatch each request. Unknown
/// types are a runtime [`Error::UnknownDocumentType`], never a fallback
/// rendering.
pub struct ParserRegistry {
    parsers: Vec<(&'static str, DetailsParser)>,
}

impl ParserRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Create a registry with every supported document type registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("answer", parse_prose);
        registry.register("html_publication", parse_prose);
        registry.register("news_story", parse_prose);
        registry.register("transaction", parse_transaction);
        registry.register("guide", parse_guide);
        registry.register("organisation", parse_organisation);
        registry.register("mainstream_browse_page", parse_mainstream_browse_page);
        registry.register("taxon", parse_taxon);
        registry
    }

    /// Register an extraction rule, replacing any existing rule for the
    /// same document type.
    pub fn register(&mut self, document_type: &'static str, parser: DetailsParser) {
        self.parsers.retain(|(name, _)| *name != document_type);
        self.parsers.push((document_type, parser));
    }

    /// Check if a document type has a registered rule.
    pub fn supports(&self, document_type: &str) -> bool {
        self.get(document_type).is_some()
    }

    /// All registered document types, in registration order.
    pub fn document_types(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|(name, _)| *name).collect()
    }

    fn get(&self, document_type: &str) -> Option<DetailsParser> {
        self.parsers
            .iter()
            .find(|(name, _)| *name == document_type)
            .map(|(_, parser)| *parser)
    }

    /// Parse a raw content item into a normalized document.
    ///
    /// Fails with [`Error::NoDocumentType`] when the item carries no
    /// `document_type`, [`Error::UnknownDocumentType`] when no rule is
    /// registered for it, and [`Error::MalformedContentItem`] when the
    /// rule or the envelope extraction fails for any reason.
    pub fn parse(&self, raw: &Value, search: &dyn SearchBackend) -> Result<Document> {
        let document_type = match raw.get("document_type") {
            None => return Err(Error::NoDocumentType),
            Some(value) => match value.as_str() {
                Some(name) => name.to_string(),
                None => value.to_string(),
            },
        };

        let parser = self
            .get(&document_type)
            .ok_or(Error::UnknownDocumentType(document_type))?;

        let ctx = ParseContext::new(raw, search);
        let empty = Value::Object(Map::new());
        let details = match raw.get("details") {
            None | Some(Value::Null) => &empty,
            Some(details) => details,
        };
        let body = parser(details, &ctx)?;

        Ok(Document {
            title: required_str(raw, "title")?.to_string(),
            description: raw
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            updated_at: required_str(raw, "public_updated_at")?.to_string(),
            body,
            links: match raw.get("links") {
                Some(links) => LinkGraph::from_raw(links)?,
                None => LinkGraph::default(),
            },
        })
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn required_str<'a>(
    raw: &'a Value,
    field: &'static str,
) -> std::result::Result<&'a str, ParseError> {
    raw.get(field)
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::model::Link;
    use serde_json::json;

    struct NoSearch;

    impl SearchBackend for NoSearch {
        fn search(&self, _query: &SearchQuery) -> std::result::Result<SearchResponse, BoxError> {
            Ok(SearchResponse::default())
        }
    }

    fn answer_item() -> Value {
        json!({
            "document_type": "answer",
            "title": "UK bank holidays",
            "description": "Find out when the next one is",
            "public_updated_at": "2019-08-07T10:00:00Z",
            "details": { "body": "<p>England and Wales have eight.</p>" },
            "links": {
                "mainstream_browse_pages": [
                    { "title": "Time off", "base_path": "/browse/time-off" },
                ],
            },
        })
    }

    #[test]
    fn test_parse_answer() {
        let registry = ParserRegistry::with_defaults();
        let document = registry.parse(&answer_item(), &NoSearch).unwrap();

        assert_eq!(document.title, "UK bank holidays");
        assert_eq!(document.description, "Find out when the next one is");
        assert_eq!(document.updated_at, "2019-08-07T10:00:00Z");
        assert_eq!(
            document.body,
            vec![MarkupElement::text("<p>England and Wales have eight.</p>").unwrap()]
        );
        assert_eq!(
            document.links.explore,
            vec![Link::new("Time off", "/browse/time-off")]
        );
    }

    #[test]
    fn test_no_document_type() {
        let registry = ParserRegistry::with_defaults();
        let err = registry
            .parse(&json!({ "title": "x" }), &NoSearch)
            .unwrap_err();
        assert!(matches!(err, Error::NoDocumentType));
    }

    #[test]
    fn test_unknown_document_type() {
        let registry = ParserRegistry::with_defaults();
        let err = registry
            .parse(&json!({ "document_type": "placeholder" }), &NoSearch)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDocumentType(name) if name == "placeholder"));
    }

    #[test]
    fn test_non_string_document_type() {
        let registry = ParserRegistry::with_defaults();
        let err = registry
            .parse(&json!({ "document_type": null }), &NoSearch)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDocumentType(name) if name == "null"));
    }

    #[test]
    fn test_missing_title_is_malformed() {
        let mut item = answer_item();
        item.as_object_mut().unwrap().remove("title");

        let registry = ParserRegistry::with_defaults();
        let err = registry.parse(&item, &NoSearch).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedContentItem(ParseError::MissingField("title"))
        ));
    }

    #[test]
    fn test_missing_updated_at_is_malformed() {
        let mut item = answer_item();
        item.as_object_mut().unwrap().remove("public_updated_at");

        let registry = ParserRegistry::with_defaults();
        let err = registry.parse(&item, &NoSearch).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedContentItem(ParseError::MissingField("public_updated_at"))
        ));
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let mut item = answer_item();
        item.as_object_mut().unwrap().remove("description");

        let registry = ParserRegistry::with_defaults();
        let document = registry.parse(&item, &NoSearch).unwrap();
        assert_eq!(document.description, "");

        item.as_object_mut()
            .unwrap()
            .insert("description".to_string(), Value::Null);
        let document = registry.parse(&item, &NoSearch).unwrap();
        assert_eq!(document.description, "");
    }

    #[test]
    fn test_missing_details_is_malformed_for_prose() {
        let registry = ParserRegistry::with_defaults();
        let err = registry
            .parse(
                &json!({
                    "document_type": "answer",
                    "title": "No details",
                    "public_updated_at": "2019-08-07T10:00:00Z",
                }),
                &NoSearch,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedContentItem(ParseError::Shape(_))
        ));
    }

    #[test]
    fn test_defaults_cover_every_supported_type() {
        let registry = ParserRegistry::with_defaults();
        let expected = [
            "answer",
            "guide",
            "html_publication",
            "mainstream_browse_page",
            "news_story",
            "organisation",
            "taxon",
            "transaction",
        ];
        for document_type in expected {
            assert!(
                registry.supports(document_type),
                "no rule for {document_type}"
            );
        }
        assert_eq!(registry.document_types().len(), expected.len());
        assert!(!registry.supports("placeholder"));
    }

    #[test]
    fn test_register_replaces_existing_rule() {
        fn empty_body(
            _details: &Value,
            _ctx: &ParseContext<'_>,
        ) -> std::result::Result<Vec<MarkupElement>, ParseError> {
            Ok(Vec::new())
        }

        let mut registry = ParserRegistry::with_defaults();
        let count = registry.document_types().len();
        registry.register("answer", empty_body);
        assert_eq!(registry.document_types().len(), count);

        let document = registry.parse(&answer_item(), &NoSearch).unwrap();
        assert!(document.body.is_empty());
    }
}
