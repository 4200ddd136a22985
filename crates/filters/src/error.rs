//! Error types for filter discovery and selection.

use thiserror::Error;

/// Errors raised while building the registry or selecting a filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A discovered candidate does not provide the `CardFilter` capability
    #[error("{type_path} is not a valid card filter: {reason}")]
    InvalidFilter { type_path: String, reason: String },

    /// Two candidates declare the same display name
    #[error("More than one filter uses the name '{0}'")]
    DuplicateFilterName(String),

    /// The user picked the back option
    #[error("Back option selected")]
    SelectionCancelled,

    /// The console answered with a label that was never offered
    #[error("Selected option does not map to a filter: {0}")]
    InternalInconsistency(String),

    /// No registered filter has this name
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Prompting or writing through the console failed
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),

    /// Raised by a filter's own set-up routine, passed through untouched
    #[error(transparent)]
    SetUp(anyhow::Error),
}

impl FilterError {
    /// True when the user backed out rather than something failing.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FilterError::SelectionCancelled)
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
