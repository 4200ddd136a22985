//! Filters that ship with the crate.
//!
//! Each module registers itself with `inventory::submit!`; the registry
//! finds them by scanning [`BUILTIN_SCAN_ROOT`]. Adding a filter means
//! adding a module here, nothing else.

pub mod assignee;
pub mod due_date;
pub mod label;
pub mod title;

// Re-export for convenience
pub use assignee::AssigneeFilter;
pub use due_date::{DueDateFilter, DueDateRule};
pub use label::LabelFilter;
pub use title::TitleFilter;

use crate::console::Console;
use anyhow::{bail, Result};

/// Module path the built-in filters register under.
pub const BUILTIN_SCAN_ROOT: &str = module_path!();

/// Ask a free-text question and reject a blank answer.
fn ask_required(console: &mut dyn Console, message: &str, what: &str) -> Result<String> {
    let answer = console.prompt_text(message)?;
    if answer.is_empty() {
        bail!("{} must not be empty", what);
    }
    Ok(answer)
}
