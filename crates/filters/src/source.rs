//! Discovery collaborators.
//!
//! A [`FilterSource`] enumerates candidate types under a scan root. It is
//! not trusted to pre-filter: the registry applies its own concrete and
//! capability checks to whatever comes back.
//!
//! Every registered entry is returned, even when two share a type path;
//! the registry rejects those rather than letting one shadow the other.

use crate::descriptor::FilterCandidate;

/// Enumerates filter candidates under a scan root.
pub trait FilterSource {
    fn scan(&self, scan_root: &str) -> Vec<FilterCandidate>;
}

/// True when `type_path` is `scan_root` itself or lives in a module below it.
fn under_root(type_path: &str, scan_root: &str) -> bool {
    if scan_root.is_empty() {
        return true;
    }
    match type_path.strip_prefix(scan_root) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}

/// Reads the process-wide list filled by `inventory::submit!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InventorySource;

impl FilterSource for InventorySource {
    /// Sorted by type path; inventory's own order is unspecified.
    fn scan(&self, scan_root: &str) -> Vec<FilterCandidate> {
        let mut found: Vec<FilterCandidate> = inventory::iter::<FilterCandidate>
            .into_iter()
            .filter(|candidate| under_root(candidate.type_path, scan_root))
            .copied()
            .collect();
        found.sort_by(|left, right| left.type_path.cmp(right.type_path));
        found
    }
}

/// Explicit in-memory candidate list.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    candidates: Vec<FilterCandidate>,
}

impl StaticSource {
    pub fn new(candidates: Vec<FilterCandidate>) -> Self {
        Self { candidates }
    }
}

impl FilterSource for StaticSource {
    fn scan(&self, scan_root: &str) -> Vec<FilterCandidate> {
        self.candidates
            .iter()
            .filter(|candidate| under_root(candidate.type_path, scan_root))
            .copied()
            .collect()
    }
}
