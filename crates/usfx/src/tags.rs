// ABOUTME: USFX element classification policy for the verse walker.
// ABOUTME: Defines the note/structural/inline tag sets and the TagClass dispatch enum.

use crate::dom::Element;

/// Footnote and cross-reference markup. The body of these elements never
/// reaches the verse text; the tail after them still belongs to the verse.
pub const NOTE_TAGS: &[&str] = &[
    "f", "x", "xo", "xt", "fr", "ft", "fk", "fq", "fqa", "fl", "fp", "fv", "fm", "ref",
];

/// Structural markers that carry no reading text. Their whole subtree,
/// tail included, is dropped when encountered inside an open verse.
pub const STRUCTURAL_TAGS: &[&str] = &[
    "book", "c", "h", "toc", "li", "d", "sp", "ms", "mt", "s", "s1", "s2", "s3", "s4", "b",
];

/// Inline wrappers whose nested text is captured in full: words of Jesus,
/// divine name styling, translator-added words, transliteration.
pub const INLINE_FLATTEN_TAGS: &[&str] = &["wj", "nd", "add", "tl"];

/// How the verse walker treats one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// `c` — chapter milestone with an `id` attribute.
    Chapter,
    /// `v` — verse-start milestone with an `id` attribute.
    VerseStart,
    /// `ve` — verse-end milestone.
    VerseEnd,
    /// Headings, list items, speaker lines and other non-content structure.
    Structural,
    /// A paragraph flagged as a cross-reference list (`p style="r"`).
    RefListParagraph,
    /// Footnote/cross-reference markup: content dropped, tail kept.
    Note,
    /// Inline wrapper captured via the mixed-content flattener.
    InlineFlatten,
    /// `q` — quotation/poetry marker: direct text only, children walk on.
    Poetry,
    /// Any other element, e.g. a word-level wrapper.
    Other,
}

/// Returns true for tags in the footnote/cross-reference family.
pub fn is_note_tag(tag: &str) -> bool {
    NOTE_TAGS.contains(&tag)
}

/// Classifies an element for the verse walker. Milestone markers win over
/// the structural set, so `c` always dispatches as a chapter boundary.
pub fn classify(elem: &Element) -> TagClass {
    match elem.tag.as_str() {
        "c" => TagClass::Chapter,
        "v" => TagClass::VerseStart,
        "ve" => TagClass::VerseEnd,
        tag if STRUCTURAL_TAGS.contains(&tag) => TagClass::Structural,
        "p" if elem.attr("style") == Some("r") => TagClass::RefListParagraph,
        tag if NOTE_TAGS.contains(&tag) => TagClass::Note,
        tag if INLINE_FLATTEN_TAGS.contains(&tag) => TagClass::InlineFlatten,
        "q" => TagClass::Poetry,
        _ => TagClass::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(tag: &str) -> Element {
        Element::new(tag)
    }

    #[test]
    fn test_milestones_win_over_structural() {
        assert_eq!(classify(&elem("c")), TagClass::Chapter);
        assert_eq!(classify(&elem("v")), TagClass::VerseStart);
        assert_eq!(classify(&elem("ve")), TagClass::VerseEnd);
    }

    #[test]
    fn test_ref_list_paragraph_needs_style() {
        let mut p = elem("p");
        assert_eq!(classify(&p), TagClass::Other);
        p.attrs.push(("style".to_string(), "r".to_string()));
        assert_eq!(classify(&p), TagClass::RefListParagraph);
    }

    #[test]
    fn test_families() {
        assert_eq!(classify(&elem("s2")), TagClass::Structural);
        assert_eq!(classify(&elem("f")), TagClass::Note);
        assert_eq!(classify(&elem("xt")), TagClass::Note);
        assert_eq!(classify(&elem("wj")), TagClass::InlineFlatten);
        assert_eq!(classify(&elem("q")), TagClass::Poetry);
        assert_eq!(classify(&elem("w")), TagClass::Other);
    }
}
