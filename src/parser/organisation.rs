//! Extraction rule for the organisation document type.
//!
//! Organisation pages carry the most structured details hash: body copy,
//! corporate information pages, featured documents, and up to six lists of
//! post holders, all rendered in a fixed section order.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::model::MarkupElement;
use crate::parser::ParseContext;

/// Notice appended to organisations outside the Freedom of Information
/// Act.
const FOI_NOTICE: &str = "This organisation is exempt from the Freedom of Information Act.";

/// Post-holder lists and their section headings, in display order.
const ROLE_SECTIONS: &[(&str, &str)] = &[
    ("ordered_ministers", "Ministers"),
    ("ordered_board_members", "Board members"),
    ("ordered_military_personnel", "Military personnel"),
    ("ordered_traffic_commissioners", "Traffic commissioners"),
    ("ordered_chief_professional_officers", "Chief professional officers"),
    ("ordered_special_representatives", "Special representatives"),
];

#[derive(Debug, Deserialize)]
struct OrganisationDetails {
    body: String,
    #[serde(default)]
    foi_exempt: Value,
    #[serde(default)]
    ordered_corporate_information_pages: Vec<InformationPage>,
    #[serde(default)]
    ordered_featured_documents: Vec<FeaturedDocument>,
}

#[derive(Debug, Deserialize)]
struct InformationPage {
    title: String,
    href: String,
}

#[derive(Debug, Deserialize)]
struct FeaturedDocument {
    title: String,
    href: String,
}

#[derive(Debug, Deserialize)]
struct Person {
    #[serde(default)]
    name_prefix: Option<String>,
    name: String,
    role: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    role_href: Option<String>,
}

/// Parse an organisation details hash.
pub fn parse_organisation(
    details: &Value,
    _ctx: &ParseContext<'_>,
) -> Result<Vec<MarkupElement>, ParseError> {
    let typed = OrganisationDetails::deserialize(details)?;
    let mut body = vec![MarkupElement::text(&typed.body)?];

    if is_truthy(&typed.foi_exempt) {
        body.push(MarkupElement::Text {
            text: FOI_NOTICE.to_string(),
        });
    }

    let pages: Vec<MarkupElement> = typed
        .ordered_corporate_information_pages
        .iter()
        .filter_map(information_page)
        .collect();
    if !pages.is_empty() {
        body.push(MarkupElement::heading("Information pages"));
        body.extend(pages);
    }

    if !typed.ordered_featured_documents.is_empty() {
        body.push(MarkupElement::heading("Featured documents"));
        for doc in &typed.ordered_featured_documents {
            body.push(MarkupElement::link(&doc.title, &doc.href));
        }
    }

    for (field, heading) in ROLE_SECTIONS {
        let people = match details.get(field) {
            None | Some(Value::Null) => continue,
            Some(value) => Vec::<Person>::deserialize(value)?,
        };
        if people.is_empty() {
            continue;
        }
        body.push(MarkupElement::heading(*heading));
        for person in &people {
            body.push(person_link(person)?);
        }
    }

    Ok(body)
}

/// Corporate information pages are internal when their href is a bare
/// path; paths carrying a query string have no content-item counterpart
/// and are dropped.
fn information_page(page: &InformationPage) -> Option<MarkupElement> {
    if page.href.starts_with('/') {
        if page.href.contains('?') {
            None
        } else {
            Some(MarkupElement::link(&page.title, &page.href))
        }
    } else {
        Some(MarkupElement::web_link(&page.title, &page.href))
    }
}

fn person_link(person: &Person) -> Result<MarkupElement, ParseError> {
    let target = person
        .role_href
        .as_deref()
        .or(person.href.as_deref())
        .ok_or(ParseError::MissingField("href"))?;

    let prefix = person.name_prefix.as_deref().filter(|p| !p.is_empty());
    let label = match prefix {
        Some(prefix) => format!("{prefix} {}, {}", person.name, person.role),
        None => format!("{}, {}", person.name, person.role),
    };

    Ok(MarkupElement::link(label, target))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::parser::{SearchBackend, SearchQuery, SearchResponse};
    use serde_json::json;

    struct NoSearch;

    impl SearchBackend for NoSearch {
        fn search(&self, _query: &SearchQuery) -> Result<SearchResponse, BoxError> {
            panic!("organisation parsing never queries the search API");
        }
    }

    fn parse(details: Value) -> Result<Vec<MarkupElement>, ParseError> {
        let raw = json!({});
        let search = NoSearch;
        let ctx = ParseContext::new(&raw, &search);
        parse_organisation(&details, &ctx)
    }

    #[test]
    fn test_body_only() {
        let body = parse(json!({ "body": "<p>We collect taxes.</p>" })).unwrap();
        assert_eq!(body, vec![MarkupElement::text("<p>We collect taxes.</p>").unwrap()]);
    }

    #[test]
    fn test_foi_notice() {
        let body = parse(json!({ "body": "<p>About us.</p>", "foi_exempt": true })).unwrap();
        assert_eq!(
            body[1],
            MarkupElement::Text {
                text: FOI_NOTICE.to_string()
            }
        );

        let body = parse(json!({ "body": "<p>About us.</p>", "foi_exempt": false })).unwrap();
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_information_page_classification() {
        let body = parse(json!({
            "body": "<p>About us.</p>",
            "ordered_corporate_information_pages": [
                { "title": "Complaints", "href": "/about/complaints" },
                { "title": "Jobs", "href": "https://jobs.example.gov.uk" },
                { "title": "Filtered", "href": "/search/news?organisation=x" },
            ],
        }))
        .unwrap();

        assert_eq!(
            body[1..],
            [
                MarkupElement::heading("Information pages"),
                MarkupElement::link("Complaints", "/about/complaints"),
                MarkupElement::web_link("Jobs", "https://jobs.example.gov.uk"),
            ]
        );
    }

    #[test]
    fn test_all_information_pages_dropped() {
        let body = parse(json!({
            "body": "<p>About us.</p>",
            "ordered_corporate_information_pages": [
                { "title": "Filtered", "href": "/search/news?organisation=x" },
            ],
        }))
        .unwrap();

        // No dangling heading when every page was dropped.
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_featured_documents() {
        let body = parse(json!({
            "body": "<p>About us.</p>",
            "ordered_featured_documents": [
                { "title": "Annual report", "href": "/government/publications/annual-report" },
            ],
        }))
        .unwrap();

        assert_eq!(
            body[1..],
            [
                MarkupElement::heading("Featured documents"),
                MarkupElement::link("Annual report", "/government/publications/annual-report"),
            ]
        );
    }

    #[test]
    fn test_person_label_with_prefix() {
        let body = parse(json!({
            "body": "<p>About us.</p>",
            "ordered_ministers": [
                {
                    "name_prefix": "Rt Hon",
                    "name": "Jane Doe",
                    "role": "Secretary",
                    "href": "/people/jane",
                },
            ],
        }))
        .unwrap();

        assert_eq!(
            body[2],
            MarkupElement::link("Rt Hon Jane Doe, Secretary", "/people/jane")
        );
    }

    #[test]
    fn test_person_prefers_role_href() {
        let body = parse(json!({
            "body": "<p>About us.</p>",
            "ordered_ministers": [
                {
                    "name": "John Smith",
                    "role": "Chancellor",
                    "href": "/government/people/john-smith",
                    "role_href": "/government/ministers/chancellor",
                },
            ],
        }))
        .unwrap();

        assert_eq!(
            body[2],
            MarkupElement::link(
                "John Smith, Chancellor",
                "/government/ministers/chancellor"
            )
        );
    }

    #[test]
    fn test_person_without_target_fails() {
        let err = parse(json!({
            "body": "<p>About us.</p>",
            "ordered_board_members": [
                { "name": "Board Member", "role": "Chair" },
            ],
        }))
        .unwrap_err();

        assert!(matches!(err, ParseError::MissingField("href")));
    }

    #[test]
    fn test_role_sections_in_declared_order() {
        let body = parse(json!({
            "body": "<p>About us.</p>",
            "ordered_board_members": [
                { "name": "Board Member", "role": "Chair", "href": "/people/chair" },
            ],
            "ordered_ministers": [
                { "name": "Jane Doe", "role": "Secretary", "href": "/people/jane" },
            ],
        }))
        .unwrap();

        assert_eq!(
            body[1..],
            [
                MarkupElement::heading("Ministers"),
                MarkupElement::link("Jane Doe, Secretary", "/people/jane"),
                MarkupElement::heading("Board members"),
                MarkupElement::link("Board Member, Chair", "/people/chair"),
            ]
        );
    }
}
