//! # IW-03 Query Gateway
//!
//! HTTP surface over the aggregation store:
//!
//! - `GET /events/<key>` - classification JSON for one application
//! - `GET|POST /reset` - clear every application
//! - `GET|POST /quit` - request process shutdown
//! - `GET /health` - store summary
//!
//! One tokio task per request; the store's own lock provides consistency.
//! A failing request never affects any other.

pub mod domain;
pub mod ports;
pub mod router;
pub mod service;

pub use domain::{ConfigError, GatewayConfig, GatewayError, QueryError};
pub use ports::{EventQueryProvider, StoreHealth};
pub use router::{build_router, AppState};
pub use service::QueryGatewayService;
