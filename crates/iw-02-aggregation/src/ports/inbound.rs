//! Inbound Ports (Driving Ports)
//!
//! The API the ingestion listener and the query gateway use to interact with
//! the aggregation store.

use shared_types::{Address, AppKey};

use crate::domain::ClassificationResult;
use crate::error::AggregationError;

/// Point-in-time summary of the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Applications with at least one observation.
    pub applications: usize,
    /// Distinct (application, address) pairs.
    pub distinct_addresses: usize,
    /// Sum of all counts.
    pub observations: u64,
}

/// Primary aggregation API (Driving Port)
///
/// All operations are linearizable with respect to each other: a query
/// observes the effect of a prefix of `record`/`reset` calls, never a partial
/// update.
pub trait EventAggregationApi: Send + Sync {
    /// Count one observation of `address` for `app_key`, creating the
    /// application on first sight. Never fails.
    fn record(&self, app_key: &AppKey, address: Address);

    /// Classify the current observations of `app_key`.
    ///
    /// # Errors
    /// `AggregationError::NotFound` if nothing was recorded for the key since
    /// start-up or the last reset.
    fn query(&self, app_key: &AppKey) -> Result<ClassificationResult, AggregationError>;

    /// `query` followed by JSON rendering.
    fn render(&self, app_key: &AppKey) -> Result<String, AggregationError>;

    /// Discard every application.
    fn reset(&self);

    /// Summary counts, taken consistently.
    fn stats(&self) -> StoreStats;
}
