// ABOUTME: Flush-time text repairs for accumulated verse fragments.
// ABOUTME: Collapses whitespace, strips pilcrows, and fixes punctuation/apostrophe spacing.

use once_cell::sync::Lazy;
use regex::Regex;

// Markup boundaries leave a space stranded before sentence punctuation.
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.:;!?])").unwrap());

// Elision artifacts: "qu 'il" / "qu ’il" should read "qu'il". ASCII letters
// only, matching the reference extraction.
static DETACHED_APOSTROPHE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z])\s+['’]").unwrap());

/// Normalizes the joined fragments of one verse into its stored form.
///
/// Steps, in order: collapse whitespace runs to single spaces, remove
/// paragraph-break pilcrows, trim, delete whitespace before `, . : ; ! ?`,
/// and rejoin a letter from a detached apostrophe. May return an empty
/// string; callers drop those verses.
pub fn normalize_verse(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = collapsed.replace('¶', "");
    let cleaned = cleaned.trim();
    let cleaned = SPACE_BEFORE_PUNCT.replace_all(cleaned, "$1");
    DETACHED_APOSTROPHE
        .replace_all(&cleaned, "${1}'")
        .into_owned()
}
