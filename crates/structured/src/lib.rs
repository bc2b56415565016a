// ABOUTME: Structured-JSON adapter library for canon-core.
// ABOUTME: Remaps a pre-split JSON Bible into the shared Translation schema via constant book tables.

pub mod adapter;
pub mod books;
pub mod error;
pub mod source;

pub use adapter::{convert_structured, parse_structured_bytes};
pub use books::{english_code, korean_abbrev, BOOK_COUNT, ENGLISH_CODES, KOREAN_ABBREVS};
pub use error::AdapterError;
pub use source::{SourceBible, SourceBook, SourceChapter, SourceVerse};
