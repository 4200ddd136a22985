//! The FilterPipeline chains configured card filters.
//!
//! Filters usually arrive one at a time from the selector, so besides the
//! builder-style `add_filter` there is `push` for boxed instances.

use crate::traits::CardFilter;
use anyhow::Result;
use board::Card;

/// Chains multiple filters together; a card survives only if every
/// filter keeps it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(LabelFilter::new("b1", "bug"))
///     .add_filter(AssigneeFilter::new("b1", "alice"));
///
/// let kept = pipeline.apply(board.cards().to_vec())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn CardFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl CardFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Append an already boxed filter, e.g. one returned by the selector.
    pub fn push(&mut self, filter: Box<dyn CardFilter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order.
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the cards.
    ///
    /// # Returns
    /// * `Ok(Vec<Card>)` - The cards kept by every filter, in input order
    /// * `Err` - If any filter fails
    pub fn apply(&self, cards: Vec<Card>) -> Result<Vec<Card>> {
        let mut current = cards;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
