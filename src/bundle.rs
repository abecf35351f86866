//! Bundle splitting: parse the XML export into per-document records.
//!
//! A bundle is one XML file with any number of `doc` elements, each carrying
//! a `str` child whose `name` attribute is the publication-number field plus
//! arbitrary other text-bearing descendants.

use roxmltree::{Document, Node};
use tracing::debug;

use crate::config::{char_limit_for, truncate_chars, PUBLICATION_NUMBER_FIELD};
use crate::error::Result;
use crate::types::DocumentRecord;
use crate::xml::{attribute, collect_text, is_named, tag_name};

/// Parse a bundle XML string into document records.
///
/// Collects every `doc` element with a non-empty publication number;
/// elements without one are skipped silently. Per qualifying document the
/// internal identifier tags (`uuid` and the publication-number `str`) are
/// excluded, the remaining text is concatenated in document order, trimmed,
/// and truncated to the script-dependent character budget.
///
/// An empty result is not an error: a bundle with no qualifying documents
/// yields an empty vector and the caller decides how to surface that.
///
/// # Arguments
/// * `xml` - The raw bundle XML
///
/// # Returns
/// Document records with 1-based sequence numbers in document order
pub fn parse_bundle(xml: &str) -> Result<Vec<DocumentRecord>> {
    let doc = Document::parse(xml)?;
    let mut records = Vec::new();

    for node in doc
        .descendants()
        .filter(|n| n.is_element() && tag_name(*n) == "doc")
    {
        let Some(identifier) = publication_number(node) else {
            debug!("skipping doc element without a publication number");
            continue;
        };

        let raw = collect_text(node, &|n: Node<'_, '_>| {
            is_named(n, "uuid") || is_publication_number(n)
        });
        let trimmed = raw.trim();
        let text = truncate_chars(trimmed, char_limit_for(trimmed));

        records.push(DocumentRecord {
            seq: records.len() + 1,
            identifier,
            text,
        });
    }

    Ok(records)
}

/// Check if a node is the publication-number `str` element.
fn is_publication_number(node: Node<'_, '_>) -> bool {
    is_named(node, "str") && attribute(node, "name") == Some(PUBLICATION_NUMBER_FIELD)
}

/// Extract the publication number of a `doc` element, if present.
///
/// Only the first matching `str` element counts; it must carry non-empty
/// text after trimming.
fn publication_number(doc: Node<'_, '_>) -> Option<String> {
    let element = doc.descendants().find(|n| is_publication_number(*n))?;
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CJK_CHAR_LIMIT;
    use pretty_assertions::assert_eq;

    fn doc_xml(identifier: &str, body: &str) -> String {
        format!(
            r#"<doc><uuid>abc-123</uuid><str name="公開(公告)番号">{identifier}</str>{body}</doc>"#
        )
    }

    #[test]
    fn test_parse_bundle_sequences_and_identifiers() {
        let xml = format!(
            "<response><result>{}{}</result></response>",
            doc_xml("JP:2020-000001", "<str name=\"発明の名称\">機関</str>"),
            doc_xml("JP:2020-000002", "<str name=\"発明の名称\">車両</str>"),
        );
        let records = parse_bundle(&xml).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq, 1);
        assert_eq!(records[0].identifier, "JP:2020-000001");
        assert_eq!(records[1].seq, 2);
        assert_eq!(records[1].identifier, "JP:2020-000002");
    }

    #[test]
    fn test_parse_bundle_strips_identifier_tags() {
        let xml = format!(
            "<root>{}</root>",
            doc_xml("JP:1", "<str name=\"要約\">abstract text</str>")
        );
        let records = parse_bundle(&xml).unwrap();

        assert_eq!(records[0].text, "abstract text");
        assert!(!records[0].text.contains("abc-123"));
        assert!(!records[0].text.contains("JP:1"));
    }

    #[test]
    fn test_parse_bundle_skips_docs_without_identifier() {
        let xml = r#"<root>
            <doc><str name="発明の名称">no number</str></doc>
            <doc><str name="公開(公告)番号"></str></doc>
            <doc><str name="公開(公告)番号">JP:1</str><str name="要約">kept</str></doc>
        </root>"#;
        let records = parse_bundle(xml).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, 1);
        assert_eq!(records[0].identifier, "JP:1");
    }

    #[test]
    fn test_parse_bundle_empty_bundle() {
        let records = parse_bundle("<response><result/></response>").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_bundle_text_is_trimmed() {
        let xml = format!("<root>{}</root>", doc_xml("JP:1", "  padded  "));
        let records = parse_bundle(&xml).unwrap();
        assert_eq!(records[0].text, "padded");
    }

    #[test]
    fn test_parse_bundle_concatenates_in_document_order() {
        let xml = format!(
            "<root>{}</root>",
            doc_xml(
                "JP:1",
                "<claims>claim one<sub>claim two</sub></claims><desc>body</desc>"
            )
        );
        let records = parse_bundle(&xml).unwrap();
        assert_eq!(records[0].text, "claim oneclaim twobody");
    }

    #[test]
    fn test_parse_bundle_truncates_cjk_text() {
        let long = "あ".repeat(CJK_CHAR_LIMIT + 50);
        let xml = format!("<root>{}</root>", doc_xml("JP:1", &long));
        let records = parse_bundle(&xml).unwrap();

        assert_eq!(records[0].text.chars().count(), CJK_CHAR_LIMIT);
    }

    #[test]
    fn test_parse_bundle_empty_content_document() {
        // A doc whose only content was the identifier tags yields empty text
        let xml = format!("<root>{}</root>", doc_xml("JP:1", ""));
        let records = parse_bundle(&xml).unwrap();
        assert_eq!(records[0].text, "");
    }

    #[test]
    fn test_parse_bundle_malformed_xml() {
        assert!(parse_bundle("<root><doc>").is_err());
    }
}
