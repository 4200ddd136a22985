//! Filter to keep cards assigned to one member.

use super::ask_required;
use crate::console::Console;
use crate::descriptor::{FilterCandidate, FilterDescriptor};
use crate::traits::CardFilter;
use anyhow::Result;
use board::{BoardId, Card};

/// Keeps cards whose members include `username` (case-insensitive).
pub struct AssigneeFilter {
    board_id: BoardId,
    username: String,
}

impl AssigneeFilter {
    pub fn new(board_id: impl Into<BoardId>, username: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            username: username.into(),
        }
    }

    /// Ask for the username to filter on.
    pub fn set_up(console: &mut dyn Console, board_id: &str) -> Result<Box<dyn CardFilter>> {
        let username = ask_required(console, "Assignee username:", "assignee username")?;
        Ok(Box::new(Self::new(board_id, username)))
    }
}

impl CardFilter for AssigneeFilter {
    fn name(&self) -> &str {
        "Assignee"
    }

    fn matches(&self, card: &Card) -> bool {
        card.board_id == self.board_id && card.has_member(&self.username)
    }
}

inventory::submit! {
    FilterCandidate::concrete(
        concat!(module_path!(), "::AssigneeFilter"),
        FilterDescriptor::new("Assignee", AssigneeFilter::set_up),
    )
}
