//! Per-application frequency table

use std::collections::HashMap;

use shared_types::Address;

use super::classifier::{classify, ClassificationResult};

/// Observed addresses for one application and how often each was seen.
///
/// Invariant: every address present has a count of at least 1. A record is
/// created by its first observation, so it is never empty.
#[derive(Debug, Clone, Default)]
pub struct ApplicationRecord {
    counts: HashMap<Address, u64>,
}

impl ApplicationRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more observation of `address`.
    pub fn observe(&mut self, address: Address) {
        *self.counts.entry(address).or_insert(0) += 1;
    }

    /// Occurrences of `address` (0 if never observed).
    pub fn count_of(&self, address: Address) -> u64 {
        self.counts.get(&address).copied().unwrap_or(0)
    }

    /// Number of distinct addresses.
    pub fn distinct_addresses(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total_observations(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Classify the current table.
    pub fn classify(&self) -> ClassificationResult {
        classify(&self.counts)
    }
}
