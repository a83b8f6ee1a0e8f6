//! # IW-01 Ingestion
//!
//! Receives fixed-size observation records over UDP and forwards each
//! decoded `(application key, address)` pair to the aggregation store.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): record layout, `decode` / `encode`
//! - **Ports Layer** (`ports/`): `ObservationSink` driven port
//! - **Adapters Layer** (`adapters/`): `UdpIngestListener` receive loop
//! - **Metrics** (`metrics`): accepted / dropped counters
//!
//! ## Error Isolation
//!
//! A datagram of the wrong size or with an invalid key is dropped and
//! counted. Nothing a peer sends can stop the loop; only the shutdown signal
//! does.
//!
//! ## Wiring
//!
//! ```ignore
//! use iw_01_ingestion::UdpIngestListener;
//!
//! let listener = UdpIngestListener::bind("0.0.0.0:3001".parse()?, sink).await?;
//! tokio::spawn(listener.run(shutdown_rx));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;

pub use adapters::UdpIngestListener;
pub use domain::{decode, encode, RECORD_SIZE};
pub use error::{DecodeError, IngestError};
pub use metrics::{IngestMetrics, MetricsSnapshot};
pub use ports::ObservationSink;
