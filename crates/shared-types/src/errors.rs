//! # Error Types
//!
//! Errors raised while constructing shared values.

use thiserror::Error;

/// Rejection reasons for an application key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppKeyError {
    /// Key does not have the fixed identifier length.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Key contains characters outside `[0-9a-fA-F]`.
    #[error("Invalid key: not a hex digest")]
    NotHex,
}
