//! Adapters Layer
//!
//! - `UdpIngestListener`: tokio UDP socket driving the decoder

pub mod udp_listener;

pub use udp_listener::{UdpIngestListener, RECV_BUFFER_SIZE};
