//! The deduplicated link graph of a document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;

/// An internal reference to another document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Title of the referenced document
    pub title: String,

    /// Path of the referenced document
    pub base_path: String,
}

impl Link {
    /// Create a new link.
    pub fn new(title: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            base_path: base_path.into(),
        }
    }
}

/// One entry of a raw `links` relation list, as the content API sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    /// Title of the linked document
    pub title: String,

    /// Path of the linked document
    pub base_path: String,

    /// Content id of the linked document, when the API includes one
    #[serde(default)]
    pub content_id: Option<String>,
}

impl From<RawLink> for Link {
    fn from(raw: RawLink) -> Self {
        Self {
            title: raw.title,
            base_path: raw.base_path,
        }
    }
}

/// Relation lists feeding each bucket, in claim order. A base path is
/// claimed by the first source that lists it and dropped everywhere else.
const PARENT_SOURCES: &[&str] = &["parent", "parent_taxons", "root_taxons"];
const EXPLORE_SOURCES: &[&str] = &["taxons", "mainstream_browse_pages"];
const PEOPLE_SOURCES: &[&str] = &["ministers", "people"];
const ORGANISATION_SOURCES: &[&str] = &[
    "organisations",
    "ordered_child_organisations",
    "ordered_high_profile_groups",
];
const RELATED_SOURCES: &[&str] = &["ordered_related_items", "suggested_ordered_related_items"];

/// Cross-references from a document to other documents, bucketed by
/// relation. Only some of the raw relations are included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGraph {
    /// The document's parent, if it has one
    pub parent: Option<Link>,

    /// Topics this document belongs to
    pub explore: Vec<Link>,

    /// People associated with this document
    pub people: Vec<Link>,

    /// Organisations associated with this document
    pub organisations: Vec<Link>,

    /// Other related documents
    pub related_items: Vec<Link>,
}

impl LinkGraph {
    /// Build the graph from a raw `links` hash.
    ///
    /// Each base path appears at most once across the whole graph: buckets
    /// and their sources are scanned in a fixed priority order and the
    /// first occurrence wins.
    pub fn from_raw(links: &Value) -> Result<Self, ParseError> {
        let mut seen = HashSet::new();
        Ok(Self {
            parent: parent_link(links, &mut seen)?,
            explore: collect(links, EXPLORE_SOURCES, &mut seen)?,
            people: collect(links, PEOPLE_SOURCES, &mut seen)?,
            organisations: collect(links, ORGANISATION_SOURCES, &mut seen)?,
            related_items: collect(links, RELATED_SOURCES, &mut seen)?,
        })
    }

    /// Check if the graph holds no links at all.
    pub fn is_empty(&self) -> bool {
        self.parent.is_none()
            && self.explore.is_empty()
            && self.people.is_empty()
            && self.organisations.is_empty()
            && self.related_items.is_empty()
    }

    /// Every base path in the graph, in render order.
    pub fn paths(&self) -> Vec<&str> {
        self.parent
            .iter()
            .chain(&self.explore)
            .chain(&self.people)
            .chain(&self.organisations)
            .chain(&self.related_items)
            .map(|link| link.base_path.as_str())
            .collect()
    }
}

/// Read one relation list off the raw hash. Absent or null relations are
/// empty; any other non-list shape is an error.
pub(crate) fn entries(links: &Value, relation: &str) -> Result<Vec<RawLink>, ParseError> {
    match links.get(relation) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Vec::<RawLink>::deserialize(value).map_err(ParseError::from),
    }
}

/// The parent is the first entry of the first non-empty parent source.
/// Discarded entries of that list claim no paths.
fn parent_link(links: &Value, seen: &mut HashSet<String>) -> Result<Option<Link>, ParseError> {
    for source in PARENT_SOURCES {
        let candidates = entries(links, source)?;
        if let Some(raw) = candidates.into_iter().next() {
            seen.insert(raw.base_path.clone());
            return Ok(Some(raw.into()));
        }
    }
    Ok(None)
}

fn collect(
    links: &Value,
    sources: &[&str],
    seen: &mut HashSet<String>,
) -> Result<Vec<Link>, ParseError> {
    let mut out = Vec::new();
    for source in sources {
        for raw in entries(links, source)? {
            if seen.insert(raw.base_path.clone()) {
                out.push(raw.into());
            }
        }
    }
    Ok(out)
}
