//! Error types for the govpher library.

use thiserror::Error;

/// Result type alias for govpher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used at the search-backend seam, where the concrete
/// transport (HTTP client, test double) picks its own error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types that can occur while turning a content item into a menu.
#[derive(Error, Debug)]
pub enum Error {
    /// The content item carries no `document_type` field at all.
    #[error("content item has no document type")]
    NoDocumentType,

    /// The content item names a document type with no registered parser.
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    /// The content item had a recognized type but its payload could not
    /// be extracted. The structured cause is preserved for callers that
    /// need to distinguish a missing field from a shape mismatch.
    #[error("malformed content item: {0}")]
    MalformedContentItem(#[from] ParseError),

    /// The renderer met a markup element it has no line format for.
    /// Parser output never triggers this; it guards partial renderers.
    #[error("unsupported markup element: {0}")]
    UnsupportedMarkup(&'static str),
}

/// The underlying cause of a [`Error::MalformedContentItem`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// A field the document type requires was absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field was present but had the wrong shape.
    #[error("invalid shape: {0}")]
    Shape(#[from] serde_json::Error),

    /// An HTML body could not be converted to plain text.
    #[error("html conversion failed: {0}")]
    Html(#[source] BoxError),

    /// A dependent search query failed.
    #[error("search query failed: {0}")]
    Search(#[source] BoxError),
}
