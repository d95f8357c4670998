//! The normalized document.

use serde::{Deserialize, Serialize};

use super::{LinkGraph, MarkupElement};

/// A content item normalized for rendering. Built once per request and
/// never mutated afterwards; `body` order is render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page title
    pub title: String,

    /// Short description, empty when the item has none
    pub description: String,

    /// Last-update timestamp, passed through unparsed
    pub updated_at: String,

    /// Ordered body content
    pub body: Vec<MarkupElement>,

    /// Cross-references to other documents
    pub links: LinkGraph,
}

impl Document {
    /// Check if the document carries a description.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Check if the document has no body content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
