//! Gateway domain: configuration and errors.

pub mod config;
pub mod error;

pub use config::{ConfigError, GatewayConfig};
pub use error::{GatewayError, QueryError};
