//! # Shared Types Crate
//!
//! Value types used by the ingestion listener, the aggregation core and the
//! query gateway.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Block` and `AppKey` are defined
//!   once here so the decoder and the HTTP path parser agree on shape.
//! - **Opaque Address**: storage keys on the integer value; the only
//!   capabilities exposed are block reduction and dotted-decimal rendering.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
