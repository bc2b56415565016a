// ABOUTME: Error types for the structured-JSON adapter.
// ABOUTME: Provides AdapterError covering parse failures and book-table misses.

use thiserror::Error;

/// Errors that can occur while adapting a pre-structured source.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The source document is not valid JSON in the expected shape.
    #[error("failed to parse structured source: {0}")]
    Parse(#[from] serde_json::Error),

    /// A book ordinal is missing from the constant tables. The tables cover
    /// ordinals 1-66; anything else is a configuration error, never a
    /// silent default.
    #[error("book number {0} has no canonical abbreviation")]
    UnknownBook(u32),
}
