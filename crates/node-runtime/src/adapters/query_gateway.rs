//! Query gateway adapter: HTTP reads and resets against the store.

use std::sync::Arc;

use iw_02_aggregation::{AggregationError, AggregationService, EventAggregationApi};
use iw_03_query_gateway::{EventQueryProvider, QueryError, StoreHealth};
use shared_types::AppKey;

/// `EventQueryProvider` over the aggregation store.
#[derive(Clone)]
pub struct StoreQueryAdapter {
    store: Arc<AggregationService>,
}

impl StoreQueryAdapter {
    pub fn new(store: Arc<AggregationService>) -> Self {
        Self { store }
    }
}

impl EventQueryProvider for StoreQueryAdapter {
    fn events_json(&self, app_key: &AppKey) -> Result<String, QueryError> {
        self.store.render(app_key).map_err(to_query_error)
    }

    fn reset(&self) {
        self.store.reset();
    }

    fn health(&self) -> StoreHealth {
        let stats = self.store.stats();
        StoreHealth {
            applications: stats.applications,
            observations: stats.observations,
        }
    }
}

fn to_query_error(err: AggregationError) -> QueryError {
    match err {
        AggregationError::NotFound { .. } => QueryError::NotFound,
        AggregationError::Serialization(detail) => QueryError::Internal(detail),
    }
}
