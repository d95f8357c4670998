//! Document model types for normalized content.
//!
//! This module defines the intermediate representation that bridges
//! content-item parsing and menu rendering. The model is protocol-agnostic:
//! nothing in it knows about menu lines or network identities.

mod document;
mod links;
mod markup;

pub use document::Document;
pub use links::{Link, LinkGraph, RawLink};
pub use markup::{MarkupElement, BULLET};

pub(crate) use links::entries as link_entries;
