//! Extraction rules for the straightforward document types.
//!
//! Each rule is a pure function of the details hash, deserializing the
//! fields it needs and assembling the body in display order.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::model::MarkupElement;
use crate::parser::ParseContext;

#[derive(Debug, Deserialize)]
struct TransactionDetails {
    #[serde(default)]
    introductory_paragraph: Option<String>,
    start_button_text: String,
    transaction_start_link: String,
    #[serde(default)]
    more_information: Option<String>,
    #[serde(default)]
    other_ways_to_apply: Option<String>,
}

/// Parse a transaction details hash: an optional introduction, the
/// mandatory start button, and the optional trailing help sections.
pub fn parse_transaction(
    details: &Value,
    _ctx: &ParseContext<'_>,
) -> Result<Vec<MarkupElement>, ParseError> {
    let details = TransactionDetails::deserialize(details)?;
    let mut body = Vec::new();

    if let Some(intro) = &details.introductory_paragraph {
        body.push(MarkupElement::text(intro)?);
    }

    body.push(MarkupElement::web_link(
        details.start_button_text,
        details.transaction_start_link,
    ));

    if let Some(more) = &details.more_information {
        body.push(MarkupElement::heading("More information"));
        body.push(MarkupElement::text(more)?);
    }

    if let Some(other) = &details.other_ways_to_apply {
        body.push(MarkupElement::heading("Other ways to apply"));
        body.push(MarkupElement::text(other)?);
    }

    Ok(body)
}

#[derive(Debug, Deserialize)]
struct ProseDetails {
    body: String,
}

/// Parse a details hash whose whole content is one `body` field. Covers
/// the answer, html_publication and news_story document types.
pub fn parse_prose(
    details: &Value,
    _ctx: &ParseContext<'_>,
) -> Result<Vec<MarkupElement>, ParseError> {
    let details = ProseDetails::deserialize(details)?;
    Ok(vec![MarkupElement::text(&details.body)?])
}

#[derive(Debug, Deserialize)]
struct GuideDetails {
    parts: Vec<GuidePart>,
}

#[derive(Debug, Deserialize)]
struct GuidePart {
    title: String,
    body: String,
}

/// Parse a guide details hash: a heading and text per part, in order.
pub fn parse_guide(
    details: &Value,
    _ctx: &ParseContext<'_>,
) -> Result<Vec<MarkupElement>, ParseError> {
    let details = GuideDetails::deserialize(details)?;
    let mut body = Vec::new();

    for part in &details.parts {
        body.push(MarkupElement::heading(&part.title));
        body.push(MarkupElement::text(&part.body)?);
    }

    Ok(body)
}
