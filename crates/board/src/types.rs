//! Core domain types for a card board.
//!
//! A board is a flat list of cards. Labels and members are referenced by
//! name on each card, which is all the filters need to evaluate them.

use crate::error::{BoardError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Identifier of a board, passed verbatim to filters as their target
pub type BoardId = String;

/// Identifier of a card, unique within a board
pub type CardId = String;

/// A single card on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub board_id: BoardId,
    pub name: String,
    /// Names of the labels attached to this card
    #[serde(default)]
    pub labels: Vec<String>,
    /// Usernames of the members assigned to this card
    #[serde(default)]
    pub members: Vec<String>,
    /// Due date, if one is set (`YYYY-MM-DD` in the export)
    #[serde(default)]
    pub due: Option<NaiveDate>,
    /// Archived cards are kept in the export but hidden by default
    #[serde(default)]
    pub closed: bool,
}

impl Card {
    /// Create an open card with no labels, members or due date.
    pub fn new(
        id: impl Into<CardId>,
        board_id: impl Into<BoardId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            name: name.into(),
            labels: Vec::new(),
            members: Vec::new(),
            due: None,
            closed: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_member(mut self, username: impl Into<String>) -> Self {
        self.members.push(username.into());
        self
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Case-insensitive label check.
    pub fn has_label(&self, label: &str) -> bool {
        let wanted = fold_case(label);
        self.labels.iter().any(|l| fold_case(l) == wanted)
    }

    /// Case-insensitive member check.
    pub fn has_member(&self, username: &str) -> bool {
        let wanted = fold_case(username);
        self.members.iter().any(|m| fold_case(m) == wanted)
    }
}

/// Case folding behind every case-insensitive card comparison.
///
/// Unicode lowercase, so "Ärger" and "ärger" compare equal.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// A board and all of its cards.
///
/// Built through [`Board::from_json`] or [`Board::load_from_file`], both of
/// which validate the cards before handing the board out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    cards: Vec<Card>,
    /// card id -> position in `cards`
    #[serde(skip)]
    card_index: HashMap<CardId, usize>,
}

impl Board {
    /// Create an empty board.
    pub fn new(id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cards: Vec::new(),
            card_index: HashMap::new(),
        }
    }

    /// All cards in export order, closed ones included.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards that are not archived.
    pub fn open_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| !card.closed)
    }

    pub fn get_card(&self, id: &str) -> Option<&Card> {
        self.card_index.get(id).map(|&idx| &self.cards[idx])
    }

    /// Distinct label names used on the board, sorted.
    pub fn label_names(&self) -> Vec<&str> {
        self.cards
            .iter()
            .flat_map(|card| card.labels.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct member usernames assigned on the board, sorted.
    pub fn member_names(&self) -> Vec<&str> {
        self.cards
            .iter()
            .flat_map(|card| card.members.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Add a card, rejecting cards from other boards, duplicate ids and
    /// blank names.
    pub fn insert_card(&mut self, card: Card) -> Result<()> {
        if card.board_id != self.id {
            return Err(BoardError::ForeignCard {
                card_id: card.id,
                expected: self.id.clone(),
                found: card.board_id,
            });
        }
        if card.name.trim().is_empty() {
            return Err(BoardError::InvalidValue {
                field: "name".to_string(),
                value: format!("card {} has an empty name", card.id),
            });
        }
        if self.card_index.contains_key(&card.id) {
            return Err(BoardError::DuplicateCard(card.id));
        }
        self.card_index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Take the cards out of a freshly deserialized board so they can be
    /// re-inserted through [`Board::insert_card`].
    pub(crate) fn take_cards(&mut self) -> Vec<Card> {
        self.card_index.clear();
        std::mem::take(&mut self.cards)
    }
}
