//! Body markup elements and their constructors.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Marker prefixed to bulleted lines in normalized text.
pub const BULLET: &str = "  * ";

/// Width handed to the HTML converter. Wide enough that it never wraps;
/// line layout is the renderer's job.
const CONVERSION_WIDTH: usize = 4096;

/// One unit of document body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkupElement {
    /// A section heading
    Heading {
        /// Heading text
        text: String,
    },

    /// Plain text, already HTML-stripped and whitespace-normalized
    Text {
        /// Newline-separated lines, each independently wrappable
        text: String,
    },

    /// An internal reference to another document by path
    Link {
        /// Link label
        text: String,
        /// Path of the referenced document
        base_path: String,
    },

    /// An external reference to a web URL
    WebLink {
        /// Link label
        text: String,
        /// Full target URL
        target: String,
    },
}

impl MarkupElement {
    /// Construct a section heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    /// Parse some HTML into a plain-text element. A conversion failure is
    /// a malformed body, not an empty one.
    pub fn text(html: &str) -> Result<Self, ParseError> {
        Ok(Self::Text {
            text: html_to_text(html)?,
        })
    }

    /// Construct an internal link.
    pub fn link(text: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            base_path: base_path.into(),
        }
    }

    /// Construct an external link (to the web).
    pub fn web_link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self::WebLink {
            text: text.into(),
            target: target.into(),
        }
    }

    /// The serialized tag name of this element.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Text { .. } => "text",
            Self::Link { .. } => "link",
            Self::WebLink { .. } => "web_link",
        }
    }

    /// Whether this element renders as a link line.
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. } | Self::WebLink { .. })
    }
}

/// Convert HTML to normalized plain text: no markup, no link footnotes,
/// ASCII quotes, no trailing whitespace, no blank edges.
fn html_to_text(html: &str) -> Result<String, ParseError> {
    let converted = html2text::config::plain()
        .string_from_read(html.as_bytes(), CONVERSION_WIDTH)
        .map_err(|e| ParseError::Html(Box::new(e)))?;
    Ok(tidy(&converted))
}

fn tidy(converted: &str) -> String {
    // The converter's footnote syntax can't be switched off.
    let footnote = Regex::new(r"^\[\d+\]: ").unwrap();
    let inline_ref = Regex::new(r"\[([^\[\]]*)\]\[\d+\]").unwrap();
    let strong = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    let emphasis = Regex::new(r"\*([^*]+)\*").unwrap();

    let mut lines = Vec::new();
    for line in converted.split('\n') {
        if footnote.is_match(line) {
            continue;
        }
        let line = inline_ref.replace_all(line, "$1");
        let line = strong.replace_all(&line, "$1");
        let line = line.replace('\u{2018}', "'").replace('\u{2019}', "'");
        let line = line.trim_end();
        let (marker, rest) = match line.strip_prefix("* ") {
            Some(rest) => (BULLET, rest),
            None => ("", line),
        };
        lines.push(format!("{marker}{}", emphasis.replace_all(rest, "$1")));
    }
    lines.join("\n").trim().to_string()
}
