//! Ingestion adapter: decoded datagrams into the store.

use std::sync::Arc;

use iw_01_ingestion::ObservationSink;
use iw_02_aggregation::{AggregationService, EventAggregationApi};
use shared_types::IpEvent;

/// `ObservationSink` that records every event in the aggregation store.
#[derive(Clone)]
pub struct StoreObservationSink {
    store: Arc<AggregationService>,
}

impl StoreObservationSink {
    pub fn new(store: Arc<AggregationService>) -> Self {
        Self { store }
    }
}

impl ObservationSink for StoreObservationSink {
    fn record(&self, event: &IpEvent) {
        self.store.record(&event.app_key, event.address);
    }
}
