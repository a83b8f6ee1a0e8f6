//! Ports Layer
//!
//! - Driven Ports (outbound) - the store behind the HTTP surface

pub mod outbound;

pub use outbound::{EventQueryProvider, StoreHealth};
