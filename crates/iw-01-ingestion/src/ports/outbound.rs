//! Outbound Ports (Driven Ports)
//!
//! The listener depends only on this trait; the node runtime adapts the
//! aggregation store to it.

use shared_types::IpEvent;

/// Destination for decoded observations (Driven Port)
pub trait ObservationSink: Send + Sync {
    /// Record one observation. Must not fail.
    fn record(&self, event: &IpEvent);
}

impl<T: ObservationSink + ?Sized> ObservationSink for std::sync::Arc<T> {
    fn record(&self, event: &IpEvent) {
        (**self).record(event);
    }
}
