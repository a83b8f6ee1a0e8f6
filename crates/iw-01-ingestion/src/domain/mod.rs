//! Domain Layer - Wire format
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod record;

pub use record::{decode, encode, ADDRESS_LEN, RECORD_SIZE};
