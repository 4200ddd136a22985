//! Discovery, selection and application of card filters.
//!
//! This crate provides:
//! - CardFilter trait for configured filters
//! - FilterRegistry, which discovers filter implementations, rejects
//!   invalid or duplicate ones and keeps them sorted by name
//! - FilterSelector, which lets a user pick a filter from the registry and
//!   hands over to that filter's own set-up
//! - FilterPipeline for chaining configured filters
//! - The built-in filters (Assignee, DueDate, Label, Title)
//!
//! ## Architecture
//! 1. Filter modules register a `FilterCandidate` with `inventory::submit!`
//! 2. `FilterRegistry::new` scans a `FilterSource` under a module path,
//!    validates the candidates and sorts them
//! 3. `FilterSelector::interactive_make` prompts through a `Console`, then
//!    calls the chosen descriptor's set-up
//! 4. Configured filters are chained in a `FilterPipeline` and applied to
//!    a board's cards
//!
//! ## Example Usage
//! ```ignore
//! use filters::{FilterPipeline, FilterRegistry, FilterSelector, StreamConsole};
//!
//! let registry = FilterRegistry::builtin()?;
//! let selector = FilterSelector::new(&registry);
//! let mut console = StreamConsole::new(stdin.lock(), stdout.lock());
//!
//! let mut pipeline = FilterPipeline::new();
//! loop {
//!     match selector.interactive_make(&mut console, &board.id) {
//!         Ok(filter) => pipeline.push(filter),
//!         Err(err) if err.is_cancelled() => break,
//!         Err(err) => return Err(err.into()),
//!     }
//! }
//! let kept = pipeline.apply(board.cards().to_vec())?;
//! ```

pub mod builtin;
pub mod console;
pub mod descriptor;
pub mod error;
pub mod filter_pipeline;
pub mod registry;
pub mod selector;
pub mod source;
pub mod traits;

// Re-export main types
pub use console::{Console, StreamConsole};
pub use descriptor::{FilterCandidate, FilterDescriptor, SetUpFn, CARD_FILTER};
pub use error::{FilterError, Result};
pub use filter_pipeline::FilterPipeline;
pub use registry::FilterRegistry;
pub use selector::{Choice, FilterSelector, BACK_LABEL, SELECT_PROMPT};
pub use source::{FilterSource, InventorySource, StaticSource};
pub use traits::CardFilter;
