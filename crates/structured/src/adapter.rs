// ABOUTME: Remaps the pre-structured JSON source into the shared Translation schema.
// ABOUTME: Composes BOOK.chapter.verse keys from the English code tables; text is trimmed only.

use canon_usfx::model::{BookMeta, Translation};

use crate::books::{english_code, korean_abbrev};
use crate::error::AdapterError;
use crate::source::SourceBible;

/// Parses structured-source bytes and adapts them into a [`Translation`].
pub fn parse_structured_bytes(
    data: &[u8],
    version: &str,
    description: &str,
) -> Result<Translation, AdapterError> {
    let source: SourceBible = serde_json::from_slice(data)?;
    convert_structured(&source, version, description)
}

/// Adapts an already-deserialized source into a [`Translation`].
///
/// Verse references are keyed by the English short code for the book's
/// ordinal; the book table carries the source display name and the Korean
/// label. The source text is assumed plain and is only trimmed. An ordinal
/// outside the tables fails the whole conversion.
pub fn convert_structured(
    source: &SourceBible,
    version: &str,
    description: &str,
) -> Result<Translation, AdapterError> {
    let mut translation = Translation::new(version, description);

    for book in &source.books {
        let code = english_code(book.nr).ok_or(AdapterError::UnknownBook(book.nr))?;
        let abbr = korean_abbrev(book.nr).ok_or(AdapterError::UnknownBook(book.nr))?;
        translation.books.insert(
            code.to_string(),
            BookMeta {
                name: book.name.clone(),
                abbr: abbr.to_string(),
            },
        );

        for chapter in &book.chapters {
            for verse in &chapter.verses {
                let key = format!("{}.{}.{}", code, chapter.chapter, verse.verse);
                translation.verses.insert(key, verse.text.trim().to_string());
            }
        }
    }

    translation.total_verses = translation.verses.len();
    Ok(translation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn source(json: &str) -> SourceBible {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_basic_conversion() {
        let src = source(
            r#"{"books": [{"nr": 1, "name": "창세기", "chapters": [
                {"chapter": 1, "verses": [
                    {"verse": 1, "text": "태초에 하나님이 천지를 창조하시니라  "},
                    {"verse": 2, "text": "땅이 혼돈하고 공허하며"}
                ]}
            ]}]}"#,
        );
        let t = convert_structured(&src, "Korean", "개역성경").unwrap();
        assert_eq!(t.version, "Korean");
        assert_eq!(t.total_verses, 2);
        assert_eq!(t.verses["GEN.1.1"], "태초에 하나님이 천지를 창조하시니라");
        assert_eq!(t.books["GEN"].name, "창세기");
        assert_eq!(t.books["GEN"].abbr, "창");
    }

    #[test]
    fn test_ordinal_43_keys_under_jhn() {
        let src = source(
            r#"{"books": [{"nr": 43, "name": "요한복음", "chapters": [
                {"chapter": 3, "verses": [{"verse": 16, "text": "하나님이 세상을 이처럼 사랑하사"}]}
            ]}]}"#,
        );
        let t = convert_structured(&src, "Korean", "개역성경").unwrap();
        assert!(t.verses.contains_key("JHN.3.16"));
        assert_eq!(t.books["JHN"].abbr, "요");
    }

    #[test]
    fn test_unknown_ordinal_is_an_error() {
        let src = source(
            r#"{"books": [{"nr": 99, "name": "unknown", "chapters": []}]}"#,
        );
        let err = convert_structured(&src, "Korean", "개역성경").unwrap_err();
        assert!(matches!(err, AdapterError::UnknownBook(99)));
    }

    #[test]
    fn test_total_verses_counts_stored_keys() {
        // Duplicate references overwrite; the count follows the table.
        let src = source(
            r#"{"books": [{"nr": 1, "name": "창세기", "chapters": [
                {"chapter": 1, "verses": [
                    {"verse": 1, "text": "first"},
                    {"verse": 1, "text": "second"}
                ]}
            ]}]}"#,
        );
        let t = convert_structured(&src, "Korean", "개역성경").unwrap();
        assert_eq!(t.total_verses, 1);
        assert_eq!(t.verses["GEN.1.1"], "second");
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = parse_structured_bytes(b"{\"books\": [", "Korean", "desc").unwrap_err();
        assert!(matches!(err, AdapterError::Parse(_)));
    }
}
