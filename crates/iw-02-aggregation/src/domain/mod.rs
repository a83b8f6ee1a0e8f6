//! Domain Layer - Pure classification logic
//!
//! This layer contains:
//! - `ApplicationRecord`: per-application address frequency table
//! - `classify`: dominant-block good/bad partition
//! - `EventsReport`: canonical JSON rendering
//!
//! RULES:
//! - No I/O operations
//! - No locking; the service layer owns synchronization

pub mod application;
pub mod classifier;
pub mod report;

pub use application::ApplicationRecord;
pub use classifier::{classify, ClassificationResult};
pub use report::EventsReport;
