//! UDP receive loop
//!
//! One task reads datagrams strictly sequentially, decodes each and hands it
//! to the `ObservationSink`. A bad datagram is logged, counted and dropped;
//! the loop always moves on to the next one.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

use crate::domain::decode;
use crate::error::{DecodeError, IngestError};
use crate::metrics::IngestMetrics;
use crate::ports::ObservationSink;

/// Receive buffer size; anything longer than a record is rejected by length.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Datagram listener feeding an `ObservationSink`.
pub struct UdpIngestListener<S: ObservationSink> {
    socket: UdpSocket,
    sink: S,
    metrics: Arc<IngestMetrics>,
}

impl<S: ObservationSink> UdpIngestListener<S> {
    /// Bind to a local address (e.g. "0.0.0.0:3001").
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Bind` if the socket cannot be bound.
    pub async fn bind(addr: SocketAddr, sink: S) -> Result<Self, IngestError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| IngestError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        Ok(Self::from_socket(socket, sink))
    }

    /// Wrap an already bound socket.
    pub fn from_socket(socket: UdpSocket, sink: S) -> Self {
        Self {
            socket,
            sink,
            metrics: Arc::new(IngestMetrics::new()),
        }
    }

    /// Address the socket is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, IngestError> {
        Ok(self.socket.local_addr()?)
    }

    /// Shared handle to the listener's counters.
    pub fn metrics(&self) -> Arc<IngestMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Decode one datagram and forward it to the sink.
    pub fn handle_datagram(&self, payload: &[u8], peer: SocketAddr) {
        self.metrics.record_received();
        match decode(payload) {
            Ok(event) => {
                trace!(%peer, app_key = %event.app_key, address = %event.address, "Datagram accepted");
                self.sink.record(&event);
                self.metrics.record_accepted();
            }
            Err(e @ DecodeError::InvalidSize { .. }) => {
                warn!(%peer, size = payload.len(), error = %e, "Dropping datagram");
                self.metrics.record_dropped_size();
            }
            Err(e @ DecodeError::InvalidAppKey(_)) => {
                warn!(%peer, error = %e, "Dropping datagram");
                self.metrics.record_dropped_malformed();
            }
        }
    }

    /// Run until `shutdown` flips to `true` or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let addr = self
            .socket
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        info!(%addr, "UDP ingestion listener started");

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        while !*shutdown.borrow() {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        debug!("Shutdown sender dropped");
                        break;
                    }
                }
                received = self.socket.recv_from(&mut buf) => match received {
                    Ok((n, peer)) => self.handle_datagram(&buf[..n], peer),
                    Err(e) => {
                        warn!(error = %e, "UDP receive failed");
                        self.metrics.record_receive_error();
                    }
                },
            }
        }

        let snap = self.metrics.snapshot();
        info!(
            received = snap.received,
            accepted = snap.accepted,
            dropped = snap.dropped(),
            receive_errors = snap.receive_errors,
            "UDP ingestion listener stopped"
        );
    }
}
