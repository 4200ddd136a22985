//! Core trait for configured card filters.
//!
//! A [`CardFilter`] is what a descriptor's set-up routine hands back: a
//! ready-to-use filter bound to one board.

use anyhow::Result;
use board::Card;
use rayon::prelude::*;

/// A configured filter over the cards of a board.
///
/// ## Design Note
/// - `Send + Sync` lets `apply` evaluate cards in parallel
/// - `apply` takes ownership of the cards and returns the kept ones in
///   their original order
pub trait CardFilter: Send + Sync {
    /// Returns the display name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Evaluate a single card.
    fn matches(&self, card: &Card) -> bool;

    /// Apply this filter to a set of cards.
    ///
    /// # Returns
    /// * `Ok(Vec<Card>)` - The cards for which `matches` holds
    /// * `Err` - If filtering fails
    fn apply(&self, cards: Vec<Card>) -> Result<Vec<Card>> {
        Ok(cards
            .into_par_iter()
            .filter(|card| self.matches(card))
            .collect())
    }
}
