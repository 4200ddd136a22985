//! Filter descriptors and discovery candidates.
//!
//! A [`FilterDescriptor`] is the type-level half of a filter: its display
//! name plus the factory that configures an instance. Filter modules make
//! themselves discoverable by submitting a [`FilterCandidate`]:
//!
//! ```ignore
//! inventory::submit! {
//!     FilterCandidate::concrete(
//!         concat!(module_path!(), "::LabelFilter"),
//!         FilterDescriptor::new("Label", LabelFilter::set_up),
//!     )
//! }
//! ```

use crate::console::Console;
use crate::traits::CardFilter;
use std::fmt;

/// Capability every card filter declares.
pub const CARD_FILTER: &str = "CardFilter";

/// Factory signature: configure a filter for the given board.
pub type SetUpFn = fn(&mut dyn Console, &str) -> anyhow::Result<Box<dyn CardFilter>>;

/// Name and factory of one filter implementation.
#[derive(Clone, Copy)]
pub struct FilterDescriptor {
    name: &'static str,
    set_up: SetUpFn,
}

impl FilterDescriptor {
    pub const fn new(name: &'static str, set_up: SetUpFn) -> Self {
        Self { name, set_up }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the filter's own configuration and return the instance.
    pub fn set_up(
        &self,
        console: &mut dyn Console,
        board_id: &str,
    ) -> anyhow::Result<Box<dyn CardFilter>> {
        (self.set_up)(console, board_id)
    }
}

impl fmt::Debug for FilterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One entry yielded by discovery, before validation.
#[derive(Debug, Clone, Copy)]
pub struct FilterCandidate {
    /// Fully qualified path of the implementing type
    pub type_path: &'static str,
    /// Abstract entries describe a family, not something to instantiate
    pub is_abstract: bool,
    /// Capabilities the entry declares
    pub capabilities: &'static [&'static str],
    /// The descriptor it provides, if any
    pub descriptor: Option<FilterDescriptor>,
}

impl FilterCandidate {
    /// A concrete card filter.
    pub const fn concrete(type_path: &'static str, descriptor: FilterDescriptor) -> Self {
        Self {
            type_path,
            is_abstract: false,
            capabilities: &[CARD_FILTER],
            descriptor: Some(descriptor),
        }
    }

    pub fn declares(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|declared| *declared == capability)
    }
}

inventory::collect!(FilterCandidate);
