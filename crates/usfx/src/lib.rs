// ABOUTME: Core USFX verse-extraction library for canon-core.
// ABOUTME: Re-exports the element tree, tag policy, extractor, and shared output model.

//! canon-usfx - verse text extraction from USFX scripture documents.
//!
//! This crate parses a USFX XML document into an owned element tree and
//! walks each book with a verse-scoped visitor, reconstructing the plain
//! reading text of every verse while dropping footnotes, cross-references
//! and structural markup, and repairing whitespace artifacts left at the
//! markup boundaries.
//!
//! # Example
//!
//! ```
//! use canon_usfx::extract_translation;
//!
//! let xml = r#"<usfx><book id="GEN"><c id="1"/><v id="1"/>In the beginning<ve/></book></usfx>"#;
//! let translation = extract_translation(xml, "KJV", "King James Version").unwrap();
//! assert_eq!(translation.verses["GEN.1.1"], "In the beginning");
//! ```

pub mod books;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod flatten;
pub mod model;
pub mod normalize;
pub mod tags;

pub use crate::books::resolve_book_meta;
pub use crate::dom::{parse_document, Element};
pub use crate::error::ExtractError;
pub use crate::extractor::extract_translation;
pub use crate::flatten::flatten;
pub use crate::model::{BookMeta, Translation, TranslationStats};
pub use crate::normalize::normalize_verse;
pub use crate::tags::{classify, TagClass};
