//! Registry of available card filters.
//!
//! ## Construction
//! 1. Discover: ask a [`FilterSource`] for candidates under a scan root,
//!    keep the concrete ones that declare [`CARD_FILTER`]
//! 2. Validate: every candidate must really provide a named descriptor,
//!    no two may share a name or a type path, and no name may collide with
//!    the selector's back option
//! 3. Sort by display name
//!
//! A failing step aborts construction; there is no partially built
//! registry.

use crate::builtin::BUILTIN_SCAN_ROOT;
use crate::descriptor::{FilterCandidate, FilterDescriptor, CARD_FILTER};
use crate::error::{FilterError, Result};
use crate::selector::BACK_LABEL;
use crate::source::{FilterSource, InventorySource};
use std::collections::HashSet;
use tracing::{debug, info};

/// Validated, name-sorted set of filter descriptors. Immutable once built.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    descriptors: Vec<FilterDescriptor>,
}

impl FilterRegistry {
    /// Build a registry from everything `source` yields under `scan_root`.
    pub fn new(source: &dyn FilterSource, scan_root: &str) -> Result<Self> {
        let candidates = Self::discover(source, scan_root);
        Self::validate(&candidates)?;

        let descriptors: Vec<FilterDescriptor> = candidates
            .iter()
            .filter_map(|candidate| candidate.descriptor)
            .collect();
        let descriptors = Self::sort_by_name(descriptors);

        info!(
            "Filter registry built: {} filters under '{}'",
            descriptors.len(),
            scan_root
        );
        Ok(Self { descriptors })
    }

    /// Registry of the filters that ship with this crate.
    pub fn builtin() -> Result<Self> {
        Self::new(&InventorySource, BUILTIN_SCAN_ROOT)
    }

    /// Collect the concrete candidates under `scan_root` that declare the
    /// card filter capability.
    pub fn discover(source: &dyn FilterSource, scan_root: &str) -> Vec<FilterCandidate> {
        let scanned = source.scan(scan_root);
        let total = scanned.len();

        let candidates: Vec<FilterCandidate> = scanned
            .into_iter()
            .filter(|candidate| !candidate.is_abstract && candidate.declares(CARD_FILTER))
            .collect();

        debug!(
            "Discovered {} filter candidates ({} scanned) under '{}'",
            candidates.len(),
            total,
            scan_root
        );
        candidates
    }

    /// Check that every candidate is a usable filter and that names and
    /// type paths are unique.
    pub fn validate(candidates: &[FilterCandidate]) -> Result<()> {
        let mut seen_names = HashSet::new();
        let mut seen_paths = HashSet::new();

        for candidate in candidates {
            let invalid = |reason: &str| FilterError::InvalidFilter {
                type_path: candidate.type_path.to_string(),
                reason: reason.to_string(),
            };

            if !candidate.declares(CARD_FILTER) {
                return Err(invalid("does not implement CardFilter"));
            }
            let descriptor = candidate
                .descriptor
                .ok_or_else(|| invalid("declares CardFilter but provides no set-up"))?;
            if descriptor.name().trim().is_empty() {
                return Err(invalid("filter name is empty"));
            }
            if descriptor.name() == BACK_LABEL {
                return Err(invalid("filter name is reserved for the back option"));
            }

            if !seen_names.insert(descriptor.name()) {
                return Err(FilterError::DuplicateFilterName(
                    descriptor.name().to_string(),
                ));
            }
            if !seen_paths.insert(candidate.type_path) {
                return Err(invalid("type path registered more than once"));
            }
        }
        Ok(())
    }

    /// Sort descriptors ascending by name.
    pub fn sort_by_name(mut descriptors: Vec<FilterDescriptor>) -> Vec<FilterDescriptor> {
        descriptors.sort_by(|left, right| left.name().cmp(right.name()));
        descriptors
    }

    /// All descriptors, sorted by name.
    pub fn list(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, name: &str) -> Option<&FilterDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.name() == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(FilterDescriptor::name).collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
