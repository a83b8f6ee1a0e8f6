//! # Adapter Implementations
//!
//! Concrete implementations of the driven ports of the ingestion and query
//! subsystems, both backed by the single `AggregationService`.
//!
//! ```text
//!   UdpIngestListener ──ObservationSink──→ StoreObservationSink ─┐
//!                                                                ├─→ AggregationService
//!   QueryGatewayService ─EventQueryProvider─→ StoreQueryAdapter ─┘
//! ```

pub mod ingestion;
pub mod query_gateway;

pub use ingestion::StoreObservationSink;
pub use query_gateway::StoreQueryAdapter;
