//! Gateway error types.

use thiserror::Error;

use super::config::ConfigError;

/// Failures reported by the query provider for a single request.
///
/// Mapped to a response for that request only; never fatal to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Nothing recorded for the key.
    #[error("Not found")]
    NotFound,

    /// Rendering failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Server-level failures.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}
