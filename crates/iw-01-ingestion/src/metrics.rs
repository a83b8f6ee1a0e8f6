//! Ingestion counters
//!
//! Thread-safe counters updated by the receive loop and read by the runtime
//! at shutdown or by tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for datagrams seen by the listener.
#[derive(Debug, Default)]
pub struct IngestMetrics {
    /// Datagrams read from the socket
    pub received: AtomicU64,
    /// Datagrams decoded and recorded
    pub accepted: AtomicU64,
    /// Datagrams rejected for their length
    pub dropped_size: AtomicU64,
    /// Datagrams of the right length with an invalid key
    pub dropped_malformed: AtomicU64,
    /// Failed socket reads
    pub receive_errors: AtomicU64,
}

/// Plain copy of `IngestMetrics` at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub received: u64,
    pub accepted: u64,
    pub dropped_size: u64,
    pub dropped_malformed: u64,
    pub receive_errors: u64,
}

impl MetricsSnapshot {
    /// Datagrams dropped for any decoding reason.
    pub fn dropped(&self) -> u64 {
        self.dropped_size + self.dropped_malformed
    }
}

impl IngestMetrics {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dropped_size(&self) {
        self.dropped_size.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dropped_malformed(&self) {
        self.dropped_malformed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_receive_error(&self) {
        self.receive_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            received: self.received.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            dropped_size: self.dropped_size.load(Ordering::Relaxed),
            dropped_malformed: self.dropped_malformed.load(Ordering::Relaxed),
            receive_errors: self.receive_errors.load(Ordering::Relaxed),
        }
    }
}
