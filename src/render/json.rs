//! JSON rendering for normalized documents, for debugging and tooling.

use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document as JSON.
pub fn to_json(document: &Document, format: JsonFormat) -> serde_json::Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(document),
        JsonFormat::Compact => serde_json::to_string(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinkGraph, MarkupElement};

    fn document() -> Document {
        Document {
            title: "Bank holidays".to_string(),
            description: String::new(),
            updated_at: "2019-08-07T10:00:00Z".to_string(),
            body: vec![MarkupElement::heading("Upcoming")],
            links: LinkGraph::default(),
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Bank holidays"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&document(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_body_elements_carry_their_tag() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&document(), JsonFormat::Compact).unwrap()).unwrap();
        assert_eq!(value["body"][0]["type"], "heading");
    }
}
