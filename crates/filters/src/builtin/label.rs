//! Filter to keep cards carrying a label.

use super::ask_required;
use crate::console::Console;
use crate::descriptor::{FilterCandidate, FilterDescriptor};
use crate::traits::CardFilter;
use anyhow::Result;
use board::{BoardId, Card};

/// Keeps cards that carry `label` (case-insensitive).
pub struct LabelFilter {
    board_id: BoardId,
    label: String,
}

impl LabelFilter {
    pub fn new(board_id: impl Into<BoardId>, label: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            label: label.into(),
        }
    }

    pub fn set_up(console: &mut dyn Console, board_id: &str) -> Result<Box<dyn CardFilter>> {
        let label = ask_required(console, "Label name:", "label name")?;
        Ok(Box::new(Self::new(board_id, label)))
    }
}

impl CardFilter for LabelFilter {
    fn name(&self) -> &str {
        "Label"
    }

    fn matches(&self, card: &Card) -> bool {
        card.board_id == self.board_id && card.has_label(&self.label)
    }
}

inventory::submit! {
    FilterCandidate::concrete(
        concat!(module_path!(), "::LabelFilter"),
        FilterDescriptor::new("Label", LabelFilter::set_up),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::StreamConsole;
    use std::io::Cursor;

    #[test]
    fn test_label_filter() {
        let cards = vec![
            Card::new("c1", "b1", "Crash on save").with_label("bug"),
            Card::new("c2", "b1", "Dark mode").with_label("feature"),
            Card::new("c3", "b1", "Typo").with_label("BUG").with_label("docs"),
        ];

        let filter = LabelFilter::new("b1", "Bug");
        let filtered = filter.apply(cards).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "c1");
        assert_eq!(filtered[1].id, "c3");
    }

    #[test]
    fn test_label_filter_folds_non_ascii_case() {
        let cards = vec![
            Card::new("c1", "b1", "Angry customer").with_label("Ärger"),
            Card::new("c2", "b1", "Calm customer").with_label("Arger"),
        ];

        let filtered = LabelFilter::new("b1", "ÄRGER").apply(cards).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c1");
    }

    #[test]
    fn test_set_up_rejects_blank_label() {
        let mut console = StreamConsole::new(Cursor::new(b"   \n".to_vec()), Vec::new());

        let err = LabelFilter::set_up(&mut console, "b1").err().unwrap();
        assert_eq!(err.to_string(), "label name must not be empty");
    }
}
