//! Error types for the aggregation subsystem

use thiserror::Error;

/// Errors returned by the aggregation API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// No observation has been recorded for the key since start-up or the
    /// last reset.
    #[error("Not found")]
    NotFound { app_key: String },

    /// The classification result could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AggregationError {
    /// True for the not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
