//! # Runtime Container
//!
//! Configuration for the node runtime.

pub mod config;

pub use config::{ConfigError, LoggingConfig, NetworkConfig, NodeConfig};
