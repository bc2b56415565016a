// ABOUTME: Serde models for the pre-structured JSON Bible source.
// ABOUTME: Mirrors the {books: [{nr, name, chapters: [{chapter, verses}]}]} input shape.

use serde::Deserialize;

/// The whole pre-split source document.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceBible {
    pub books: Vec<SourceBook>,
}

/// One book, identified by its canonical 1-based ordinal.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceBook {
    pub nr: u32,
    pub name: String,
    pub chapters: Vec<SourceChapter>,
}

/// One chapter with its verse records.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceChapter {
    pub chapter: u32,
    pub verses: Vec<SourceVerse>,
}

/// One verse record; the text is already plain.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceVerse {
    pub verse: u32,
    pub text: String,
}
