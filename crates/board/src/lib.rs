//! # Board Crate
//!
//! Domain data that card filters act on.
//!
//! ## Main Components
//!
//! - **types**: `Board`, `Card` and the id aliases
//! - **loader**: read a board from its JSON export
//! - **error**: error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use board::Board;
//! use std::path::Path;
//!
//! let board = Board::load_from_file(Path::new("board.json"))?;
//! for card in board.open_cards() {
//!     println!("{} {:?}", card.name, card.labels);
//! }
//! ```

pub mod error;
pub mod types;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{BoardError, Result};
pub use types::{fold_case, Board, BoardId, Card, CardId};
