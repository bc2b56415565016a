// ABOUTME: Error types for USFX extraction.
// ABOUTME: Provides ExtractError with an Xml variant for malformed source documents.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while extracting verses from a source document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source document is not well-formed XML.
    #[error("failed to parse source document: {0}")]
    Xml(String),
}

impl ExtractError {
    /// Creates an Xml error from an underlying parser error.
    pub fn xml(err: impl fmt::Display) -> Self {
        ExtractError::Xml(err.to_string())
    }
}
