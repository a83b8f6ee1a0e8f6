//! Service Layer
//!
//! Owns the shared store and its lock.

pub mod aggregation_service;

pub use aggregation_service::AggregationService;
