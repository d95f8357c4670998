//! Extraction rules for the browse and taxonomy document types.
//!
//! These two types list other documents instead of carrying their own
//! prose, so their bodies are resolved through link lookups and search
//! queries rather than read out of the details hash.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::model::{MarkupElement, RawLink};
use crate::parser::{ParseContext, SearchQuery, SearchResult};

/// Prefix stripped off a browse page's own path to get its search tag.
const BROWSE_PREFIX: &str = "/browse/";

/// Link relations holding a browse page's subsections, in lookup order.
const SUBSECTION_SOURCES: &[&str] = &["children", "second_level_browse_pages"];

#[derive(Debug, Deserialize)]
struct BrowseDetails {
    #[serde(default)]
    groups: Vec<Group>,
    #[serde(default)]
    ordered_second_level_browse_pages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Group {
    name: String,
    #[serde(default)]
    contents: Vec<String>,
}

/// Parse a mainstream browse page.
///
/// Content teams curate these pages to wildly varying degrees, so the body
/// comes from the first of five strategies to produce anything: curated
/// groups, a tagged search, the ordered subsection list, the unordered
/// subsection links, and finally the top-level browse links.
pub fn parse_mainstream_browse_page(
    details: &Value,
    ctx: &ParseContext<'_>,
) -> Result<Vec<MarkupElement>, ParseError> {
    let typed = BrowseDetails::deserialize(details)?;
    let subsections = subsection_links(ctx)?;

    if let Some(body) = curated_groups(&typed.groups, &subsections, ctx)? {
        return Ok(body);
    }
    if let Some(body) = tagged_search(ctx)? {
        return Ok(body);
    }
    if let Some(body) = ordered_subsections(&typed.ordered_second_level_browse_pages, &subsections)
    {
        return Ok(body);
    }

    let second = ctx.links("second_level_browse_pages")?;
    if !second.is_empty() {
        return Ok(second.into_iter().map(subsection_link).collect());
    }

    let top = ctx.links("top_level_browse_pages")?;
    Ok(top.into_iter().map(subsection_link).collect())
}

/// Parse a taxon: one link per document tagged under it in the taxonomy
/// tree.
pub fn parse_taxon(
    _details: &Value,
    ctx: &ParseContext<'_>,
) -> Result<Vec<MarkupElement>, ParseError> {
    let content_id = ctx.content_id()?;
    let response = ctx.search(&SearchQuery::filtered("part_of_taxonomy_tree", content_id))?;
    Ok(response.results.iter().map(result_link).collect())
}

/// Resolve each curated group against the subsection links, falling back
/// to a search for paths the links don't cover. Groups that resolve to
/// nothing lose their heading too.
fn curated_groups(
    groups: &[Group],
    subsections: &[RawLink],
    ctx: &ParseContext<'_>,
) -> Result<Option<Vec<MarkupElement>>, ParseError> {
    let mut by_path: HashMap<&str, &RawLink> = HashMap::new();
    for link in subsections {
        by_path.entry(link.base_path.as_str()).or_insert(link);
    }

    let mut body = Vec::new();
    for group in groups {
        let mut section = Vec::new();
        for path in &group.contents {
            match by_path.get(path.as_str()) {
                Some(link) => section.push(MarkupElement::link(&link.title, path)),
                None => {
                    let response = ctx.search(&SearchQuery::filtered("link", path))?;
                    if let Some(result) = response.results.first() {
                        section.push(MarkupElement::link(&result.title, path));
                    }
                }
            }
        }
        if !section.is_empty() {
            body.push(MarkupElement::heading(&group.name));
            body.append(&mut section);
        }
    }

    if body.is_empty() {
        Ok(None)
    } else {
        Ok(Some(body))
    }
}

/// Search for pages tagged to this browse page.
fn tagged_search(ctx: &ParseContext<'_>) -> Result<Option<Vec<MarkupElement>>, ParseError> {
    let base_path = ctx.base_path()?;
    let tag = base_path.strip_prefix(BROWSE_PREFIX).unwrap_or(base_path);
    let response = ctx.search(&SearchQuery::filtered("mainstream_browse_pages", tag))?;

    let body: Vec<MarkupElement> = response.results.iter().map(result_link).collect();
    if body.is_empty() {
        Ok(None)
    } else {
        Ok(Some(body))
    }
}

/// Emit subsections in the order the details hash declares, matching ids
/// against the subsection links. Unknown ids are dropped.
fn ordered_subsections(ordered: &[String], subsections: &[RawLink]) -> Option<Vec<MarkupElement>> {
    let mut by_id: HashMap<&str, &RawLink> = HashMap::new();
    for link in subsections {
        if let Some(id) = link.content_id.as_deref() {
            by_id.entry(id).or_insert(link);
        }
    }

    let body: Vec<MarkupElement> = ordered
        .iter()
        .filter_map(|id| by_id.get(id.as_str()))
        .map(|link| MarkupElement::link(&link.title, &link.base_path))
        .collect();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

fn subsection_links(ctx: &ParseContext<'_>) -> Result<Vec<RawLink>, ParseError> {
    let mut links = Vec::new();
    for source in SUBSECTION_SOURCES {
        links.extend(ctx.links(source)?);
    }
    Ok(links)
}

fn subsection_link(raw: RawLink) -> MarkupElement {
    MarkupElement::link(raw.title, raw.base_path)
}

fn result_link(result: &SearchResult) -> MarkupElement {
    MarkupElement::link(&result.title, &result.link)
}
