// ABOUTME: Book metadata resolution from USFX running headers and toc entries.
// ABOUTME: Implements the header/toc3/toc1+toc2/first-three-chars fallback policy.

use crate::dom::Element;
use crate::model::BookMeta;

/// Resolves display name and abbreviation for one `book` container.
///
/// Priority: the running header `h` supplies the name; a `toc level="3"`
/// entry supplies the abbreviation. Translations without level-3 entries
/// (e.g. Chinese) use `toc level="1"` as the name and `toc level="2"` as
/// the abbreviation. Failing both, the abbreviation falls back to the first
/// three characters of the name.
///
/// Returns `None` when the book has no header text at all; such books get
/// no entry in the book table even though their verses are still extracted.
pub fn resolve_book_meta(book: &Element) -> Option<BookMeta> {
    let header = book.find_tag("h")?;
    let header_text = header.text.as_deref().filter(|t| !t.is_empty())?;
    let mut name = header_text.trim().to_string();

    let abbr = if let Some(toc3) = toc_text(book, "3") {
        toc3.trim().to_string()
    } else if let (Some(toc1), Some(toc2)) = (toc_text(book, "1"), toc_text(book, "2")) {
        name = toc1.trim().to_string();
        toc2.trim().to_string()
    } else {
        // Chars, not bytes: names may open with multibyte letters.
        name.chars().take(3).collect()
    };

    Some(BookMeta { name, abbr })
}

/// Direct text of the first toc entry at the given detail level.
fn toc_text<'a>(book: &'a Element, level: &str) -> Option<&'a str> {
    book.find(|elem| elem.tag == "toc" && elem.attr("level") == Some(level))
        .and_then(|elem| elem.text.as_deref())
        .filter(|t| !t.is_empty())
}
