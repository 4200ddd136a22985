//! Loading boards from JSON exports.
//!
//! The export is a single JSON object:
//!
//! ```text
//! {
//!   "id": "b1",
//!   "name": "Roadmap",
//!   "cards": [
//!     { "id": "c1", "board_id": "b1", "name": "Ship it",
//!       "labels": ["bug"], "members": ["alice"], "due": "2026-10-20" }
//!   ]
//! }
//! ```
//!
//! `labels`, `members`, `due` and `closed` may be omitted.

use crate::error::{BoardError, Result};
use crate::types::Board;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

impl Board {
    /// Parse a board from its JSON export and validate every card.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut board: Board = serde_json::from_str(json)?;

        if board.id.trim().is_empty() {
            return Err(BoardError::InvalidValue {
                field: "id".to_string(),
                value: board.id,
            });
        }

        // Rebuild through insert_card so the index and the checks apply
        let cards = board.take_cards();
        for card in cards {
            board.insert_card(card)?;
        }
        Ok(board)
    }

    /// Read and parse a board export from disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => BoardError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => BoardError::IoError(err),
        })?;
        Self::from_json(&json)
    }
}
