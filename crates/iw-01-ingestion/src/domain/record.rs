//! Inbound observation record
//!
//! # Wire Format
//!
//! Fixed `RECORD_SIZE` bytes, no framing:
//! - Bytes 0-63: application key, ASCII hex digest
//! - Bytes 64-67: IPv4 address, network (big-endian) order
//!
//! Datagrams of any other length are rejected whole.

use shared_types::{Address, AppKey, AppKeyError, IpEvent, APP_KEY_LEN};

use crate::error::DecodeError;

/// Length of the address field.
pub const ADDRESS_LEN: usize = 4;

/// Total record length.
pub const RECORD_SIZE: usize = APP_KEY_LEN + ADDRESS_LEN;

/// Decode one datagram payload into an observation.
pub fn decode(payload: &[u8]) -> Result<IpEvent, DecodeError> {
    if payload.len() != RECORD_SIZE {
        return Err(DecodeError::InvalidSize {
            actual: payload.len(),
            expected: RECORD_SIZE,
        });
    }

    let (key_bytes, addr_bytes) = payload.split_at(APP_KEY_LEN);
    let key_text = std::str::from_utf8(key_bytes).map_err(|_| AppKeyError::NotHex)?;
    let app_key = AppKey::parse(key_text)?;

    let mut octets = [0u8; ADDRESS_LEN];
    octets.copy_from_slice(addr_bytes);

    Ok(IpEvent {
        app_key,
        address: Address::from_octets(octets),
    })
}

/// Encode an observation into its wire form.
///
/// The key is written verbatim; callers are expected to hold a key produced
/// by `AppKey::parse`.
pub fn encode(event: &IpEvent) -> Vec<u8> {
    let mut out = Vec::with_capacity(RECORD_SIZE);
    out.extend_from_slice(event.app_key.as_str().as_bytes());
    out.extend_from_slice(&event.address.octets());
    out
}
