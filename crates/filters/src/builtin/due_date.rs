//! Filter on card due dates.
//!
//! The rule is picked from a short menu during set-up. "Today" is captured
//! once at set-up so a filter gives the same answer for its whole lifetime.

use crate::console::Console;
use crate::descriptor::{FilterCandidate, FilterDescriptor};
use crate::traits::CardFilter;
use anyhow::{anyhow, Result};
use board::{BoardId, Card};
use chrono::{Days, Local, NaiveDate};

const OVERDUE: &str = "Overdue";
const DUE_WITHIN: &str = "Due within days";
const NO_DUE_DATE: &str = "No due date";

/// Which cards a [`DueDateFilter`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateRule {
    /// Due strictly before today
    Overdue,
    /// Due between today and today + N days, inclusive
    DueWithin(u32),
    /// No due date set
    NoDueDate,
}

/// Keeps cards whose due date satisfies a [`DueDateRule`].
pub struct DueDateFilter {
    board_id: BoardId,
    rule: DueDateRule,
    today: NaiveDate,
}

impl DueDateFilter {
    pub fn new(board_id: impl Into<BoardId>, rule: DueDateRule, today: NaiveDate) -> Self {
        Self {
            board_id: board_id.into(),
            rule,
            today,
        }
    }

    pub fn rule(&self) -> DueDateRule {
        self.rule
    }

    /// Ask which rule to apply, and for `Due within days` how many days.
    pub fn set_up(console: &mut dyn Console, board_id: &str) -> Result<Box<dyn CardFilter>> {
        let options = [OVERDUE, DUE_WITHIN, NO_DUE_DATE].map(String::from);
        let rule = match console.prompt_choice("Due date rule:", &options)?.as_str() {
            OVERDUE => DueDateRule::Overdue,
            NO_DUE_DATE => DueDateRule::NoDueDate,
            DUE_WITHIN => {
                let answer = console.prompt_text("Number of days:")?;
                let days = answer
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid number of days: '{}'", answer))?;
                DueDateRule::DueWithin(days)
            }
            other => return Err(anyhow!("unknown due date rule: '{}'", other)),
        };

        Ok(Box::new(Self::new(board_id, rule, Local::now().date_naive())))
    }
}

impl CardFilter for DueDateFilter {
    fn name(&self) -> &str {
        "DueDate"
    }

    fn matches(&self, card: &Card) -> bool {
        if card.board_id != self.board_id {
            return false;
        }
        match (self.rule, card.due) {
            (DueDateRule::Overdue, Some(due)) => due < self.today,
            (DueDateRule::DueWithin(days), Some(due)) => {
                // Saturates at the far end of the calendar
                let horizon = self
                    .today
                    .checked_add_days(Days::new(u64::from(days)))
                    .unwrap_or(NaiveDate::MAX);
                due >= self.today && due <= horizon
            }
            (DueDateRule::NoDueDate, due) => due.is_none(),
            (_, None) => false,
        }
    }
}

inventory::submit! {
    FilterCandidate::concrete(
        concat!(module_path!(), "::DueDateFilter"),
        FilterDescriptor::new("DueDate", DueDateFilter::set_up),
    )
}
