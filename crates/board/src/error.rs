//! Error types for the board crate.
//!
//! Every failure while reading or checking a board export lands in
//! [`BoardError`]. Callers in other crates usually wrap it with
//! `anyhow::Context` before surfacing it.

use thiserror::Error;

/// Errors that can occur while loading a board.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Board file could not be found
    #[error("Failed to open board file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The export is not valid board JSON
    #[error("Parse error at line {line}, column {column}: {reason}")]
    ParseError {
        line: usize,
        column: usize,
        reason: String,
    },

    /// A card claims to belong to a different board
    #[error("Card {card_id} belongs to board {found}, expected {expected}")]
    ForeignCard {
        card_id: String,
        expected: String,
        found: String,
    },

    /// Two cards share the same id
    #[error("Duplicate card id: {0}")]
    DuplicateCard(String),

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::ParseError {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, BoardError>;
