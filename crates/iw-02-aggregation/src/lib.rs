//! # IW-02 Aggregation
//!
//! Per-application address frequency store with the dominant-block
//! classifier and its JSON rendering.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O, no locks
//!   - `ApplicationRecord`: address → count table
//!   - `classify`: good/bad partition by dominant block
//!   - `EventsReport`: `{"count","good_ips","bad_ips"}` rendering
//!
//! - **Ports Layer** (`ports/`): `EventAggregationApi` driving port
//!
//! - **Service Layer** (`service/`): `AggregationService`, the single
//!   lock-guarded store owned by the node runtime
//!
//! ## Invariants
//!
//! - Every stored address has a count of at least 1.
//! - `good_ips ∪ bad_ips` is exactly the set of distinct recorded addresses,
//!   and the two are disjoint.
//! - Equal block weights resolve to the lowest block value.
//!
//! ## Usage Example
//!
//! ```
//! use iw_02_aggregation::{AggregationService, EventAggregationApi};
//! use shared_types::{Address, AppKey};
//!
//! let store = AggregationService::new();
//! let app = AppKey::new_unchecked("app");
//! store.record(&app, Address::from_octets([192, 160, 0, 1]));
//! store.record(&app, Address::from_octets([10, 0, 0, 1]));
//!
//! let json = store.render(&app).unwrap();
//! assert!(json.starts_with(r#"{"count":2,"#));
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{classify, ApplicationRecord, ClassificationResult, EventsReport};
pub use error::AggregationError;
pub use ports::{EventAggregationApi, StoreStats};
pub use service::AggregationService;
