//! Ports Layer
//!
//! Driving port (inbound) for callers of the aggregation core. The core has
//! no driven dependencies; listeners reach it through adapters in the node
//! runtime.

pub mod inbound;

pub use inbound::{EventAggregationApi, StoreStats};
