// ABOUTME: Shared output schema for converted translations.
// ABOUTME: Translation and BookMeta serde models plus derived per-document statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A converted document is considered complete at or above this verse count.
pub const MIN_COMPLETE_VERSES: usize = 20_000;

/// ...with fewer than this many empty verses.
pub const MAX_EMPTY_VERSES: usize = 100;

/// Verses below this many characters are reported as suspiciously short.
pub const SHORT_VERSE_CHARS: usize = 10;

/// Display metadata for one book of a translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMeta {
    pub name: String,
    pub abbr: String,
}

/// One fully converted translation, ready for serialization.
///
/// `verses` is keyed by `BOOK.chapter.verse` reference strings; `books` by
/// the book's canonical short code. `total_verses` always equals the verse
/// table's length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub version: String,
    pub description: String,
    pub total_verses: usize,
    pub books: BTreeMap<String, BookMeta>,
    pub verses: BTreeMap<String, String>,
}

impl Translation {
    /// Creates an empty translation with the given version tag and description.
    pub fn new(version: impl Into<String>, description: impl Into<String>) -> Self {
        Translation {
            version: version.into(),
            description: description.into(),
            ..Translation::default()
        }
    }

    /// Computes reporting statistics over the verse table.
    pub fn stats(&self) -> TranslationStats {
        let mut empty = 0;
        let mut short = 0;
        let mut total_chars = 0usize;
        for text in self.verses.values() {
            let chars = text.chars().count();
            total_chars += chars;
            if chars == 0 {
                empty += 1;
            } else if chars < SHORT_VERSE_CHARS {
                short += 1;
            }
        }
        let verses = self.verses.len();
        TranslationStats {
            verses,
            empty,
            short,
            avg_chars: if verses > 0 {
                total_chars as f64 / verses as f64
            } else {
                0.0
            },
        }
    }
}

/// Reporting statistics for one converted document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationStats {
    pub verses: usize,
    pub empty: usize,
    pub short: usize,
    pub avg_chars: f64,
}

impl TranslationStats {
    /// True when the document cleared the completeness bar: at least
    /// [`MIN_COMPLETE_VERSES`] verses and fewer than [`MAX_EMPTY_VERSES`]
    /// empty ones.
    pub fn is_complete(&self) -> bool {
        self.verses >= MIN_COMPLETE_VERSES && self.empty < MAX_EMPTY_VERSES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn translation_with(verses: &[(&str, &str)]) -> Translation {
        let mut t = Translation::new("TEST", "Test Version");
        for (key, text) in verses {
            t.verses.insert(key.to_string(), text.to_string());
        }
        t.total_verses = t.verses.len();
        t
    }

    #[test]
    fn test_stats_counts() {
        let t = translation_with(&[
            ("GEN.1.1", "In the beginning God created the heaven and the earth."),
            ("GEN.1.2", "short"),
            ("GEN.1.3", ""),
        ]);
        let stats = t.stats();
        assert_eq!(stats.verses, 3);
        assert_eq!(stats.empty, 1);
        assert_eq!(stats.short, 1);
        assert!(stats.avg_chars > 0.0);
    }

    #[test]
    fn test_empty_translation_stats() {
        let t = Translation::new("TEST", "Test Version");
        let stats = t.stats();
        assert_eq!(stats.verses, 0);
        assert_eq!(stats.avg_chars, 0.0);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_completeness_thresholds() {
        let below = TranslationStats { verses: 19_999, empty: 0, short: 0, avg_chars: 40.0 };
        assert!(!below.is_complete());
        let ok = TranslationStats { verses: 31_102, empty: 2, short: 10, avg_chars: 40.0 };
        assert!(ok.is_complete());
        let too_many_empty = TranslationStats { verses: 31_102, empty: 100, short: 0, avg_chars: 40.0 };
        assert!(!too_many_empty.is_complete());
    }

    #[test]
    fn test_serialized_shape() {
        let mut t = translation_with(&[("GEN.1.1", "In the beginning")]);
        t.books.insert(
            "GEN".to_string(),
            BookMeta { name: "Genesis".to_string(), abbr: "Gen".to_string() },
        );
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["version"], "TEST");
        assert_eq!(json["total_verses"], 1);
        assert_eq!(json["books"]["GEN"]["abbr"], "Gen");
        assert_eq!(json["verses"]["GEN.1.1"], "In the beginning");
    }
}
