//! Ports Layer
//!
//! - Driven Ports (outbound) - where decoded observations go

pub mod outbound;

pub use outbound::ObservationSink;
