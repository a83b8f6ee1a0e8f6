//! Outbound Ports (Driven Ports)
//!
//! The gateway never touches the store directly; the node runtime supplies
//! an adapter implementing `EventQueryProvider`.

use shared_types::AppKey;

use crate::domain::QueryError;

/// Store summary exposed on `/health`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreHealth {
    pub applications: usize,
    pub observations: u64,
}

/// Read/reset access to the aggregation store (Driven Port)
pub trait EventQueryProvider: Send + Sync + 'static {
    /// Rendered classification JSON for `app_key`.
    fn events_json(&self, app_key: &AppKey) -> Result<String, QueryError>;

    /// Clear all recorded observations.
    fn reset(&self);

    /// Summary counts.
    fn health(&self) -> StoreHealth;
}
