//! # Node Runtime
//!
//! Owns the aggregation store and the two listeners that share it.
//!
//! ## Lifecycle
//!
//! 1. `bind` validates the configuration and binds the UDP and HTTP sockets
//! 2. `run` spawns the UDP receive loop and serves HTTP
//! 3. `/quit` or a `ShutdownHandle` flips the shutdown channel
//! 4. the gateway drains in-flight requests, the UDP loop exits, and the
//!    final counters are logged

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use iw_01_ingestion::{MetricsSnapshot, UdpIngestListener};
use iw_02_aggregation::{AggregationService, EventAggregationApi, StoreStats};
use iw_03_query_gateway::{GatewayConfig, QueryGatewayService};
use tokio::sync::watch;
use tracing::info;

use crate::adapters::{StoreObservationSink, StoreQueryAdapter};
use crate::container::NodeConfig;

/// Cloneable trigger for stopping a running `NodeRuntime`.
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    /// Request shutdown. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Counters reported when the runtime stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ingest: MetricsSnapshot,
    pub store: StoreStats,
}

/// Bound, not yet running node.
pub struct NodeRuntime {
    store: Arc<AggregationService>,
    ingest: UdpIngestListener<StoreObservationSink>,
    gateway: QueryGatewayService,
    shutdown_tx: Arc<watch::Sender<bool>>,
    udp_addr: SocketAddr,
    http_addr: SocketAddr,
}

impl NodeRuntime {
    /// Validate `config` and bind both listeners.
    pub async fn bind(config: &NodeConfig) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(AggregationService::new());
        let (shutdown_tx, _) = watch::channel(false);
        let shutdown_tx = Arc::new(shutdown_tx);

        let ingest = UdpIngestListener::bind(
            config.network.udp_addr,
            StoreObservationSink::new(Arc::clone(&store)),
        )
        .await
        .context("failed to start UDP ingestion")?;
        let udp_addr = ingest.local_addr()?;

        let gateway = QueryGatewayService::bind(
            GatewayConfig::with_addr(config.network.http_addr),
            Arc::new(StoreQueryAdapter::new(Arc::clone(&store))),
            Arc::clone(&shutdown_tx),
        )
        .await
        .context("failed to start HTTP query gateway")?;
        let http_addr = gateway.local_addr()?;

        Ok(Self {
            store,
            ingest,
            gateway,
            shutdown_tx,
            udp_addr,
            http_addr,
        })
    }

    /// Bound UDP address.
    pub fn udp_addr(&self) -> SocketAddr {
        self.udp_addr
    }

    /// Bound HTTP address.
    pub fn http_addr(&self) -> SocketAddr {
        self.http_addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: Arc::clone(&self.shutdown_tx),
        }
    }

    /// Serve until shutdown is requested, then stop both listeners.
    pub async fn run(self) -> Result<RunSummary> {
        info!(udp = %self.udp_addr, http = %self.http_addr, "Node runtime started");

        let metrics = self.ingest.metrics();
        let ingest_task = tokio::spawn(self.ingest.run(self.shutdown_tx.subscribe()));

        let served = self.gateway.run(self.shutdown_tx.subscribe()).await;
        // The gateway may also stop on a serve error; take ingestion down with it.
        self.shutdown_tx.send_replace(true);
        ingest_task.await.context("UDP ingestion task failed")?;
        served.context("HTTP query gateway failed")?;

        let summary = RunSummary {
            ingest: metrics.snapshot(),
            store: self.store.stats(),
        };
        info!(
            datagrams_received = summary.ingest.received,
            datagrams_accepted = summary.ingest.accepted,
            datagrams_dropped = summary.ingest.dropped(),
            applications = summary.store.applications,
            observations = summary.store.observations,
            "Node runtime stopped"
        );
        Ok(summary)
    }
}
