//! JSON rendering of a classification
//!
//! Wire shape (field order is fixed):
//!
//! ```text
//! {"count":5,"good_ips":["192.160.0.1",...],"bad_ips":["10.0.0.1"]}
//! ```
//!
//! Both arrays are sorted as strings, so `"10.0.0.1"` precedes `"9.0.0.1"`.

use serde::Serialize;

use super::classifier::ClassificationResult;
use crate::error::AggregationError;

/// Serializable view of a `ClassificationResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsReport {
    pub count: u64,
    pub good_ips: Vec<String>,
    pub bad_ips: Vec<String>,
}

impl EventsReport {
    /// Serialize to the compact wire form.
    pub fn to_json(&self) -> Result<String, AggregationError> {
        serde_json::to_string(self).map_err(|e| AggregationError::Serialization(e.to_string()))
    }
}

impl From<&ClassificationResult> for EventsReport {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            count: result.count,
            good_ips: sorted_strings(&result.good),
            bad_ips: sorted_strings(&result.bad),
        }
    }
}

fn sorted_strings<T: ToString>(items: &[T]) -> Vec<String> {
    let mut out: Vec<String> = items.iter().map(ToString::to_string).collect();
    out.sort_unstable();
    out
}
