//! Aggregation Service
//!
//! The process-wide store: application key → frequency table, behind one
//! `RwLock`. `record` and `reset` take the write lock; `query`, `render` and
//! `stats` classify under the read lock, so every read sees a single
//! consistent state.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::{Address, AppKey};
use tracing::{debug, info, trace};

use crate::domain::{ApplicationRecord, ClassificationResult, EventsReport};
use crate::error::AggregationError;
use crate::ports::{EventAggregationApi, StoreStats};

/// In-memory aggregation store implementing `EventAggregationApi`.
#[derive(Debug, Default)]
pub struct AggregationService {
    applications: RwLock<HashMap<AppKey, ApplicationRecord>>,
}

impl AggregationService {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(app_key: &AppKey) -> AggregationError {
        AggregationError::NotFound {
            app_key: app_key.to_string(),
        }
    }
}

impl EventAggregationApi for AggregationService {
    fn record(&self, app_key: &AppKey, address: Address) {
        let mut applications = self.applications.write();
        match applications.get_mut(app_key) {
            Some(record) => record.observe(address),
            None => {
                let mut record = ApplicationRecord::new();
                record.observe(address);
                applications.insert(app_key.clone(), record);
                debug!(app_key = %app_key, "New application observed");
            }
        }
        trace!(app_key = %app_key, address = %address, "Observation recorded");
    }

    fn query(&self, app_key: &AppKey) -> Result<ClassificationResult, AggregationError> {
        let result = self
            .applications
            .read()
            .get(app_key)
            .map(ApplicationRecord::classify)
            .ok_or_else(|| Self::not_found(app_key))?;

        if let Some(block) = result.dominant_block {
            trace!(
                app_key = %app_key,
                dominant_block = %block,
                good = result.good.len(),
                bad = result.bad.len(),
                "Application classified"
            );
        }
        Ok(result)
    }

    fn render(&self, app_key: &AppKey) -> Result<String, AggregationError> {
        let result = self.query(app_key)?;
        EventsReport::from(&result).to_json()
    }

    fn reset(&self) {
        let cleared = std::mem::take(&mut *self.applications.write());
        info!(applications = cleared.len(), "Store reset");
        // `cleared` is dropped here, outside the lock.
    }

    fn stats(&self) -> StoreStats {
        let applications = self.applications.read();
        applications
            .values()
            .fold(
                StoreStats {
                    applications: applications.len(),
                    ..StoreStats::default()
                },
                |mut stats, record| {
                    stats.distinct_addresses += record.distinct_addresses();
                    stats.observations += record.total_observations();
                    stats
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(tag: &str) -> AppKey {
        AppKey::new_unchecked(tag)
    }

    fn addr(octets: [u8; 4]) -> Address {
        Address::from_octets(octets)
    }

    #[test]
    fn test_query_unrecorded_key_is_not_found() {
        let service = AggregationService::new();
        let err = service.query(&key("missing")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_render_unrecorded_key_is_not_found() {
        let service = AggregationService::new();
        assert!(matches!(
            service.render(&key("missing")),
            Err(AggregationError::NotFound { .. })
        ));
    }

    #[test]
    fn test_record_then_query() {
        let service = AggregationService::new();
        let k = key("app");
        for _ in 0..3 {
            service.record(&k, addr([10, 1, 1, 1]));
        }

        let result = service.query(&k).unwrap();
        assert_eq!(result.count, 3);
        assert_eq!(result.good, vec![addr([10, 1, 1, 1])]);
        assert!(result.bad.is_empty());
    }

    #[test]
    fn test_query_reports_dominant_block() {
        let service = AggregationService::new();
        let k = key("app");
        service.record(&k, addr([10, 1, 1, 1]));
        service.record(&k, addr([10, 1, 1, 2]));
        service.record(&k, addr([10, 9, 9, 9]));

        let block = service.query(&k).unwrap().dominant_block.unwrap();
        assert_eq!(block, addr([10, 1, 1, 0]).block());
        assert_eq!(block.to_string(), "10.1.1.0/28");
    }

    #[test]
    fn test_applications_are_independent() {
        let service = AggregationService::new();
        service.record(&key("a"), addr([1, 1, 1, 1]));
        service.record(&key("b"), addr([2, 2, 2, 2]));
        service.record(&key("b"), addr([2, 2, 2, 3]));

        assert_eq!(service.query(&key("a")).unwrap().count, 1);
        assert_eq!(service.query(&key("b")).unwrap().count, 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let service = AggregationService::new();
        service.record(&key("a"), addr([1, 1, 1, 1]));
        service.record(&key("b"), addr([2, 2, 2, 2]));

        service.reset();

        assert!(service.query(&key("a")).unwrap_err().is_not_found());
        assert!(service.query(&key("b")).unwrap_err().is_not_found());
        assert_eq!(service.stats(), StoreStats::default());
    }

    #[test]
    fn test_record_after_reset_starts_fresh() {
        let service = AggregationService::new();
        let k = key("a");
        service.record(&k, addr([1, 1, 1, 1]));
        service.record(&k, addr([1, 1, 1, 1]));
        service.reset();
        service.record(&k, addr([1, 1, 1, 1]));

        assert_eq!(service.query(&k).unwrap().count, 1);
    }

    #[test]
    fn test_stats() {
        let service = AggregationService::new();
        service.record(&key("a"), addr([1, 1, 1, 1]));
        service.record(&key("a"), addr([1, 1, 1, 1]));
        service.record(&key("a"), addr([1, 1, 1, 2]));
        service.record(&key("b"), addr([9, 9, 9, 9]));

        assert_eq!(
            service.stats(),
            StoreStats {
                applications: 2,
                distinct_addresses: 3,
                observations: 4,
            }
        );
    }

    #[test]
    fn test_any_address_value_accepted() {
        let service = AggregationService::new();
        let k = key("edge");
        service.record(&k, Address::new(0));
        service.record(&k, Address::new(u32::MAX));

        let result = service.query(&k).unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.good.len() + result.bad.len(), 2);
    }
}
