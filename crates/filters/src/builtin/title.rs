//! Filter on card titles.

use super::ask_required;
use crate::console::Console;
use crate::descriptor::{FilterCandidate, FilterDescriptor};
use crate::traits::CardFilter;
use anyhow::Result;
use board::{fold_case, BoardId, Card};

/// Keeps cards whose name contains `needle`, ignoring case.
pub struct TitleFilter {
    board_id: BoardId,
    needle: String,
}

impl TitleFilter {
    pub fn new(board_id: impl Into<BoardId>, needle: &str) -> Self {
        Self {
            board_id: board_id.into(),
            needle: fold_case(needle),
        }
    }

    pub fn set_up(console: &mut dyn Console, board_id: &str) -> Result<Box<dyn CardFilter>> {
        let needle = ask_required(console, "Title contains:", "title text")?;
        Ok(Box::new(Self::new(board_id, &needle)))
    }
}

impl CardFilter for TitleFilter {
    fn name(&self) -> &str {
        "Title"
    }

    fn matches(&self, card: &Card) -> bool {
        card.board_id == self.board_id && fold_case(&card.name).contains(&self.needle)
    }
}

inventory::submit! {
    FilterCandidate::concrete(
        concat!(module_path!(), "::TitleFilter"),
        FilterDescriptor::new("Title", TitleFilter::set_up),
    )
}
