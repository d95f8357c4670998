//! Menu rendering: the normalized document as protocol lines.
//!
//! A response is a sequence of sections separated by a divider; each
//! section is a sequence of chunks separated by one blank line. Every
//! line carries a one-character type tag, tab-delimited fields where its
//! type needs them, and a CRLF terminator. Clients are strict about this
//! layout, so the formats here are reproduced bit-exactly.

use crate::error::{Error, Result};
use crate::model::{Document, Link, LinkGraph, MarkupElement};
use crate::render::options::RenderOptions;
use crate::render::wrap::wrap_text;

/// Relation buckets and their section headings, in display order.
const LINK_SECTIONS: &[&str] = &[
    "Parent",
    "Explore this topic",
    "Related people",
    "Related organisations",
    "Related items",
];

/// Renders documents as menus for one network identity.
pub struct MenuRenderer {
    options: RenderOptions,
}

impl MenuRenderer {
    /// Create a renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document as one complete response.
    ///
    /// Rendering is pure: the same document and options yield
    /// byte-identical output every time.
    pub fn render(&self, document: &Document) -> Result<String> {
        let mut sections: Vec<Vec<String>> = Vec::new();

        sections.push(vec![self.header_chunk(document)]);

        if document.has_description() {
            sections.push(vec![self.text_chunk(&document.description)]);
        }

        let body = self.body_chunks(&document.body)?;
        if !body.is_empty() {
            sections.push(body);
        }

        let links = self.link_chunks(&document.links);
        if !links.is_empty() {
            sections.push(links);
        }

        let blank = info_line("");
        let divider = format!(
            "{blank}{}{blank}",
            info_line(&"-".repeat(self.options.width))
        );
        let sections: Vec<String> = sections
            .into_iter()
            .map(|chunks| chunks.join(&blank))
            .collect();
        Ok(sections.join(&divider))
    }

    fn header_chunk(&self, document: &Document) -> String {
        format!(
            "{}{}",
            info_line(&document.title),
            info_line(&format!("Updated: {}", document.updated_at))
        )
    }

    /// One chunk of wrapped informational lines.
    fn text_chunk(&self, text: &str) -> String {
        wrap_text(text, self.options.width)
            .iter()
            .map(|line| info_line(line))
            .collect()
    }

    fn heading_chunk(&self, text: &str) -> String {
        info_line(&format!("----- {text} -----"))
    }

    /// Translate body elements into chunks. Consecutive link elements
    /// coalesce into a single chunk; anything else flushes the run.
    fn body_chunks(&self, body: &[MarkupElement]) -> Result<Vec<String>> {
        let mut chunks = Vec::new();
        let mut run = String::new();

        for element in body {
            if !element.is_link() && !run.is_empty() {
                chunks.push(std::mem::take(&mut run));
            }
            match element {
                MarkupElement::Heading { text } => chunks.push(self.heading_chunk(text)),
                MarkupElement::Text { text } => chunks.push(self.text_chunk(text)),
                MarkupElement::Link { .. } | MarkupElement::WebLink { .. } => {
                    run.push_str(&self.link_line(element)?);
                }
            }
        }
        if !run.is_empty() {
            chunks.push(run);
        }
        Ok(chunks)
    }

    /// One protocol line for a link element. Handing this guard any
    /// other element kind is a parser/renderer contract violation.
    fn link_line(&self, element: &MarkupElement) -> Result<String> {
        match element {
            MarkupElement::Link { text, base_path } => Ok(self.menu_line(text, base_path)),
            MarkupElement::WebLink { text, target } => Ok(url_line(text, target)),
            other => Err(Error::UnsupportedMarkup(other.tag())),
        }
    }

    /// The cross-reference sections, one heading chunk and one chunk of
    /// menu lines per non-empty bucket.
    fn link_chunks(&self, links: &LinkGraph) -> Vec<String> {
        let buckets: [Vec<&Link>; 5] = [
            links.parent.iter().collect(),
            links.explore.iter().collect(),
            links.people.iter().collect(),
            links.organisations.iter().collect(),
            links.related_items.iter().collect(),
        ];

        let mut chunks = Vec::new();
        for (title, bucket) in LINK_SECTIONS.iter().zip(buckets) {
            if bucket.is_empty() {
                continue;
            }
            chunks.push(self.heading_chunk(title));
            chunks.push(
                bucket
                    .iter()
                    .map(|link| self.menu_line(&link.title, &link.base_path))
                    .collect(),
            );
        }
        chunks
    }

    fn menu_line(&self, label: &str, selector: &str) -> String {
        format!(
            "1{label}\t{selector}\t{}\t{}\r\n",
            self.options.host, self.options.port
        )
    }
}

/// Render a document with the given options.
pub fn to_menu(document: &Document, options: &RenderOptions) -> Result<String> {
    MenuRenderer::new(options.clone()).render(document)
}

fn info_line(text: &str) -> String {
    format!("i{text}\r\n")
}

fn url_line(label: &str, target: &str) -> String {
    format!("h{label}\tURL:{target}\t\t\r\n")
}

/// Render a generic three-line error page.
pub fn error_page(title: &str, message: &str) -> String {
    format!("i{title}\r\ni\r\ni{message}\r\n")
}

/// Error page for a path that could not be rendered.
pub fn bad_content_page(base_path: &str, message: &str) -> String {
    error_page(&format!("Could not render \"{base_path}\""), message)
}

/// Error page for a request that is not a path.
pub fn bad_request_page(request: &str) -> String {
    error_page(
        &format!("Could not understand \"{request}\""),
        "Requests should be paths on GOV.UK.",
    )
}
