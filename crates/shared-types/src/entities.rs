//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Addressing**: `Address`, `Block`, `BLOCK_SIZE`
//! - **Identity**: `AppKey`, `APP_KEY_LEN`
//! - **Events**: `IpEvent`

use std::fmt;
use std::net::Ipv4Addr;

use crate::errors::AppKeyError;

// =============================================================================
// CLUSTER A: ADDRESSING
// =============================================================================

/// Number of consecutive address values folded into one classification block.
pub const BLOCK_SIZE: u32 = 16;

/// A 32-bit IPv4 address.
///
/// Any 32-bit value is accepted; routing correctness is the decoder's concern.
/// Rendered as four dotted decimal octets, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(u32);

impl Address {
    /// Create an address from its integer value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create an address from octets in network order.
    #[must_use]
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(octets))
    }

    /// Integer value of the address.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Octets in network order.
    #[must_use]
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Reduce the address to its classification block.
    #[must_use]
    pub const fn block(self) -> Block {
        Block(self.0 - (self.0 % BLOCK_SIZE))
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(u32::from(ip))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Ipv4Addr::from(self.0), f)
    }
}

/// The lowest address of a run of `BLOCK_SIZE` consecutive values.
///
/// Blocks are aligned, so each one is also a CIDR range, which is how it
/// displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Block(u32);

impl Block {
    /// Integer value of the first address in the block.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = 32 - BLOCK_SIZE.trailing_zeros();
        write!(f, "{}/{}", Ipv4Addr::from(self.0), prefix)
    }
}

// =============================================================================
// CLUSTER B: IDENTITY
// =============================================================================

/// Length of an application key on the wire and in query paths.
pub const APP_KEY_LEN: usize = 64;

/// Opaque application identifier (a hex digest on the wire).
///
/// Stored verbatim: two keys are equal iff their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppKey(String);

impl AppKey {
    /// Validate and wrap a key of exactly `APP_KEY_LEN` hex characters.
    pub fn parse(raw: &str) -> Result<Self, AppKeyError> {
        if raw.len() != APP_KEY_LEN {
            return Err(AppKeyError::InvalidLength {
                expected: APP_KEY_LEN,
                actual: raw.len(),
            });
        }
        hex::decode(raw).map_err(|_| AppKeyError::NotHex)?;
        Ok(Self(raw.to_owned()))
    }

    /// Wrap a key without validation.
    ///
    /// The aggregation core treats keys as opaque, so tests and embedders may
    /// use any string.
    #[must_use]
    pub fn new_unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// CLUSTER C: EVENTS
// =============================================================================

/// A decoded inbound observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpEvent {
    /// Application the address was observed for.
    pub app_key: AppKey,
    /// Observed address.
    pub address: Address,
}
