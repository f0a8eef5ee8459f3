//! Error types for Infinity Core

use crate::types::Section;
use thiserror::Error;

/// Result type alias using InfinityError
pub type Result<T> = std::result::Result<T, InfinityError>;

/// Top-level error type for all Infinity Core operations
#[derive(Debug, Error)]
pub enum InfinityError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur when reading values from their textual form
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Invalid access type: {0}")]
    InvalidAccessType(String),

    #[error("Percentage out of range (0-100): {0}")]
    PercentOutOfRange(f64),

    #[error("Byte 0x{byte:02X} at offset {offset} is undefined in Windows-1252")]
    UndefinedByte { byte: u8, offset: usize },
}

/// Structural problems found in a book
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Entry {id} is listed under {expected} but marked as {found}")]
    SectionMismatch {
        id: String,
        expected: Section,
        found: Section,
    },

    #[error("Entry {id} in {section} must not carry chapter number {number}")]
    UnexpectedChapterNumber {
        id: String,
        section: Section,
        number: u32,
    },

    #[error("Chapter {id} is numbered {found}, expected {expected}")]
    NumberingGap { id: String, expected: u32, found: u32 },

    #[error("Duplicate chapter id: {0}")]
    DuplicateId(String),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),
}
