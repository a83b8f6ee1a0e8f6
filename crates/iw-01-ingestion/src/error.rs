//! Error types for the ingestion subsystem

use thiserror::Error;

/// Reasons a datagram is rejected before reaching the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Bad packet: {actual} bytes read, expected {expected}")]
    InvalidSize { actual: usize, expected: usize },

    #[error("Invalid application key: {0}")]
    InvalidAppKey(#[from] shared_types::AppKeyError),
}

/// Socket-level failures of the listener
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),
}
