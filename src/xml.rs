//! XML utility functions for navigating and extracting text from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use oa_prep::xml::tag_name;
///
/// let doc = Document::parse(r#"<doc><str name="a"/></doc>"#).unwrap();
/// assert_eq!(tag_name(doc.root_element()), "doc");
/// ```
pub fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given tag name.
pub fn is_named(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && tag_name(node) == tag
}

/// Get an attribute value from a node.
pub fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Concatenate all text in a subtree in document order, skipping excluded
/// subtrees.
///
/// Mirrors the text model of element trees: an element contributes its
/// leading text, then each child element's subtree followed by that child's
/// tail. An excluded element drops its whole subtree *and* its tail. No
/// separators are inserted beyond what the source already contains.
///
/// # Arguments
/// * `node` - Root of the subtree
/// * `excluded` - Predicate marking element subtrees to skip
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use oa_prep::xml::{collect_text, is_named};
///
/// let doc = Document::parse("<doc>a<skip>x</skip>b<keep>c</keep></doc>").unwrap();
/// let text = collect_text(doc.root_element(), &|n| is_named(n, "skip"));
/// assert_eq!(text, "abc");
/// ```
pub fn collect_text<'a, 'input, F>(node: Node<'a, 'input>, excluded: &F) -> String
where
    F: Fn(Node<'a, 'input>) -> bool,
{
    let mut text = String::new();
    collect_into(node, excluded, &mut text);
    text
}

fn collect_into<'a, 'input, F>(node: Node<'a, 'input>, excluded: &F, out: &mut String)
where
    F: Fn(Node<'a, 'input>) -> bool,
{
    if let Some(leading) = node.text() {
        out.push_str(leading);
    }

    for child in node.children().filter(|c| c.is_element()) {
        if excluded(child) {
            continue;
        }
        collect_into(child, excluded, out);
        if let Some(tail) = child.tail() {
            out.push_str(tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_tag_name_strips_namespace() {
        let xml = r#"<w:document xmlns:w="http://example.com"><w:body/></w:document>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(tag_name(doc.root_element()), "document");
    }

    #[test]
    fn test_is_named() {
        let doc = Document::parse("<doc/>").unwrap();
        assert!(is_named(doc.root_element(), "doc"));
        assert!(!is_named(doc.root_element(), "other"));
    }

    #[test]
    fn test_attribute() {
        let doc = Document::parse(r#"<str name="title"/>"#).unwrap();
        assert_eq!(attribute(doc.root_element(), "name"), Some("title"));
        assert_eq!(attribute(doc.root_element(), "missing"), None);
    }

    #[test]
    fn test_collect_text_document_order() {
        let xml = "<doc>head<a>one</a>mid<b>two<c>three</c></b>tail</doc>";
        let doc = Document::parse(xml).unwrap();
        let text = collect_text(doc.root_element(), &|_| false);
        assert_eq!(text, "headonemidtwothreetail");
    }

    #[test]
    fn test_collect_text_excluded_subtree_drops_tail() {
        // The skipped element's inner text and its tail are both dropped
        let xml = "<doc>a<skip>inner<deep>deeper</deep></skip>tail<b>b</b></doc>";
        let doc = Document::parse(xml).unwrap();
        let text = collect_text(doc.root_element(), &|n| is_named(n, "skip"));
        assert_eq!(text, "ab");
    }

    #[test]
    fn test_collect_text_no_inserted_separators() {
        let xml = "<doc><a>one</a><b>two</b></doc>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(collect_text(doc.root_element(), &|_| false), "onetwo");
    }

    #[test]
    fn test_collect_text_empty() {
        let doc = Document::parse("<doc/>").unwrap();
        assert_eq!(collect_text(doc.root_element(), &|_| false), "");
    }
}
