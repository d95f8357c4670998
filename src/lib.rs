//! # govpher
//!
//! GOV.UK pages as Gopher menus.
//!
//! This library fetches nothing itself: callers hand it a raw content
//! item from the GOV.UK content API and a [`SearchBackend`] for the
//! dependent queries some document types need, and it normalizes the
//! item into a [`Document`] and renders that as a Gopher menu.
//!
//! ## Quick Start
//!
//! ```
//! use govpher::{parse_content_item, render_menu, RenderOptions};
//! use govpher::{SearchBackend, SearchQuery, SearchResponse};
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
//!     let raw = json!({
//!         "document_type": "answer",
//!         "title": "UK bank holidays",
//!         "public_updated_at": "2019-08-07T10:00:00Z",
//!         "details": { "body": "<p>Find out when the bank holidays are.</p>" },
//!     });
//!
//!     let document = parse_content_item(&raw, &NoSearch)?;
//!     let menu = render_menu(&document, &RenderOptions::new("localhost", 70))?;
//!     assert!(menu.starts_with("iUK bank holidays\r\n"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed document model**: heading, text, internal and external links
//! - **Eight document types**: from plain answers to curated browse pages
//! - **Deduplicated link graph**: parent, topics, people, organisations
//! - **Protocol-exact output**: tagged, tab-delimited, CRLF-terminated lines
//! - **Word wrap**: fixed column width with bullet-list indentation

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod selector;

// Re-export commonly used types
pub use error::{BoxError, Error, ParseError, Result};
pub use model::{Document, Link, LinkGraph, MarkupElement};
pub use parser::{ParserRegistry, SearchBackend, SearchQuery, SearchResponse, SearchResult};
pub use render::{JsonFormat, MenuRenderer, RenderOptions};

use serde_json::Value;

/// Parse a raw content item into a normalized document.
///
/// Builds a default [`ParserRegistry`] per call; callers dispatching many
/// requests should construct the registry once and use
/// [`ParserRegistry::parse`] directly.
///
/// # Example
///
/// ```no_run
/// # struct NoSearch;
/// # impl govpher::SearchBackend for NoSearch {
/// #     fn search(&self, _q: &govpher::SearchQuery)
/// #         -> Result<govpher::SearchResponse, govpher::BoxError> {
/// #         Ok(govpher::SearchResponse::default())
/// #     }
/// # }
/// let raw: serde_json::Value = serde_json::from_str("{}").unwrap();
/// let document = govpher::parse_content_item(&raw, &NoSearch).unwrap();
/// println!("{}", document.title);
/// ```
pub fn parse_content_item(raw: &Value, search: &dyn SearchBackend) -> Result<Document> {
    ParserRegistry::with_defaults().parse(raw, search)
}

/// Render a normalized document as one complete menu response.
pub fn render_menu(document: &Document, options: &RenderOptions) -> Result<String> {
    render::to_menu(document, options)
}
