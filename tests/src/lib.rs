//! # IP Watch Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Store and codec throughput (criterion)
//! └── src/integration/  # Whole-process flows over real sockets
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p iw-tests
//! cargo bench -p iw-tests
//! ```

pub mod integration;
