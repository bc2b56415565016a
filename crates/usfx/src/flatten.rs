// ABOUTME: Mixed-content text flattener for USFX elements.
// ABOUTME: Concatenates all nested reading text, skipping note subtrees but keeping their tails.

use crate::dom::Element;
use crate::tags::is_note_tag;

/// Returns the complete plain text of an element and its descendants, in
/// document order, excluding the element's own tail (the caller owns tail
/// placement) and excluding the subtrees of footnote/cross-reference tags.
///
/// The tail of a skipped note element is still emitted: that text follows
/// the note's closing tag and belongs to the surrounding narrative.
pub fn flatten(elem: &Element) -> String {
    let mut out = String::new();
    flatten_into(elem, &mut out);
    out
}

fn flatten_into(elem: &Element, out: &mut String) {
    if let Some(text) = &elem.text {
        out.push_str(text);
    }
    for child in &elem.children {
        if !is_note_tag(&child.tag) {
            flatten_into(child, out);
        }
        if let Some(tail) = &child.tail {
            out.push_str(tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_unchanged() {
        let root = parse_document("<w>In the beginning</w>").unwrap();
        assert_eq!(flatten(&root), "In the beginning");
    }

    #[test]
    fn test_nested_children_in_document_order() {
        let root = parse_document("<p>a <w>b</w> c <w>d<w>e</w></w> f</p>").unwrap();
        assert_eq!(flatten(&root), "a b c de f");
    }

    #[test]
    fn test_note_body_skipped_tail_kept() {
        let root = parse_document("<p>before <f>note body</f> after</p>").unwrap();
        assert_eq!(flatten(&root), "before  after");
    }

    #[test]
    fn test_note_nested_below_wrapper_also_skipped() {
        let root = parse_document("<p>a<w>b<x>crossref</x>c</w>d</p>").unwrap();
        assert_eq!(flatten(&root), "abcd");
    }

    #[test]
    fn test_own_tail_excluded() {
        let root = parse_document("<p><w>word</w> tail</p>").unwrap();
        let w = &root.children[0];
        assert_eq!(flatten(w), "word");
    }

    #[test]
    fn test_idempotent_on_flat_content() {
        let root = parse_document("<p>already plain text</p>").unwrap();
        let once = flatten(&root);
        let again = parse_document(&format!("<p>{}</p>", once)).unwrap();
        assert_eq!(flatten(&again), once);
    }
}
