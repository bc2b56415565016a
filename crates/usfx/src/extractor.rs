// ABOUTME: Verse-scoped recursive walker over USFX book containers.
// ABOUTME: Tracks chapter/verse state and stores normalized text per reference key.

use std::collections::BTreeMap;

use crate::books::resolve_book_meta;
use crate::dom::{parse_document, Element};
use crate::error::ExtractError;
use crate::flatten::flatten;
use crate::model::Translation;
use crate::normalize::normalize_verse;
use crate::tags::{classify, TagClass};

/// Extracts a full translation from USFX document text.
///
/// Every `book` container with an `id` attribute is walked; book display
/// metadata is resolved where a running header exists. Verse text lands in
/// the output keyed `BOOK.chapter.verse`; duplicate references keep the
/// last occurrence.
pub fn extract_translation(
    xml: &str,
    version: &str,
    description: &str,
) -> Result<Translation, ExtractError> {
    let root = parse_document(xml)?;
    let mut translation = Translation::new(version, description);

    let mut book_elems: Vec<&Element> = Vec::new();
    if root.tag == "book" {
        book_elems.push(&root);
    }
    root.collect_tag("book", &mut book_elems);

    for book in book_elems {
        let Some(book_id) = book.attr("id") else {
            continue;
        };
        if let Some(meta) = resolve_book_meta(book) {
            translation.books.insert(book_id.to_string(), meta);
        }
        let mut walker = VerseWalker::new(book_id, &mut translation.verses);
        walker.visit_children(book);
        // A verse still open at the end of the book is dropped: only
        // chapter and verse milestones flush.
    }

    translation.total_verses = translation.verses.len();
    Ok(translation)
}

/// State machine for one book: the open chapter/verse ids and the fragment
/// accumulator of the verse being read.
struct VerseWalker<'a> {
    book_id: &'a str,
    chapter: Option<String>,
    verse: Option<String>,
    fragments: Vec<String>,
    verses: &'a mut BTreeMap<String, String>,
}

impl<'a> VerseWalker<'a> {
    fn new(book_id: &'a str, verses: &'a mut BTreeMap<String, String>) -> Self {
        VerseWalker {
            book_id,
            chapter: None,
            verse: None,
            fragments: Vec::new(),
            verses,
        }
    }

    fn in_verse(&self) -> bool {
        self.chapter.is_some() && self.verse.is_some()
    }

    fn push(&mut self, fragment: &str) {
        if !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
    }

    /// Writes the open verse under its reference key and clears the
    /// accumulator. A no-op unless both chapter and verse are set; text
    /// that normalizes to nothing is never stored.
    fn flush(&mut self) {
        if let (Some(chapter), Some(verse)) = (&self.chapter, &self.verse) {
            let text = normalize_verse(&self.fragments.join(" "));
            if !text.is_empty() {
                self.verses
                    .insert(format!("{}.{}.{}", self.book_id, chapter, verse), text);
            }
        }
        self.fragments.clear();
    }

    fn visit_children(&mut self, elem: &Element) {
        for child in &elem.children {
            self.visit(child);
        }
    }

    fn visit(&mut self, elem: &Element) {
        match classify(elem) {
            TagClass::Chapter => {
                self.flush();
                self.chapter = elem.attr("id").map(str::to_string);
                self.verse = None;
            }
            TagClass::VerseStart => {
                self.flush();
                self.verse = elem.attr("id").map(str::to_string);
                // Text right after the milestone is the verse opening.
                if let Some(tail) = &elem.tail {
                    self.push(tail);
                }
            }
            TagClass::VerseEnd => {
                self.flush();
                self.verse = None;
            }
            _ if !self.in_verse() => {
                // No open verse: nothing to collect, but milestones can sit
                // at any depth, so containers are still descended.
                self.visit_children(elem);
            }
            TagClass::Structural | TagClass::RefListParagraph => {
                // Whole subtree dropped, tail included.
            }
            TagClass::Note => {
                if let Some(tail) = &elem.tail {
                    self.push(tail);
                }
            }
            TagClass::InlineFlatten | TagClass::Other => {
                self.push(&flatten(elem));
                if let Some(tail) = &elem.tail {
                    self.push(tail);
                }
            }
            TagClass::Poetry => {
                if let Some(text) = &elem.text {
                    self.push(text);
                }
                if let Some(tail) = &elem.tail {
                    self.push(tail);
                }
                self.visit_children(elem);
            }
        }
    }
}
