//! # IP Watch Node Runtime
//!
//! Wires the subsystems into one process:
//!
//! - `iw-01-ingestion` receives observation records over UDP
//! - `iw-02-aggregation` keeps per-application address counts and
//!   classifies them
//! - `iw-03-query-gateway` serves the results over HTTP
//!
//! ## Modular Structure
//!
//! - `container/` - layered configuration
//! - `adapters/` - port implementations backed by the shared store
//! - `runtime` - bind / run / shutdown
//! - `telemetry` - tracing subscriber setup
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, file, environment, flags)
//! 2. Install logging
//! 3. Bind UDP and HTTP listeners
//! 4. Serve until `/quit` or Ctrl-C

pub mod adapters;
pub mod container;
pub mod runtime;
pub mod telemetry;

pub use container::{ConfigError, NodeConfig};
pub use runtime::{NodeRuntime, RunSummary, ShutdownHandle};
