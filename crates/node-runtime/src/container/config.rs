//! # Node Configuration
//!
//! Layered configuration for the runtime:
//!
//! 1. built-in defaults
//! 2. optional TOML file (`--config <path>`)
//! 3. environment (`IW_UDP_ADDR`, `IW_HTTP_ADDR`, `IW_LOG_LEVEL` / `RUST_LOG`,
//!    `IW_JSON_LOGS`)
//! 4. command-line flags, applied by the binary
//!
//! ```toml
//! [network]
//! udp_addr = "0.0.0.0:3001"
//! http_addr = "0.0.0.0:3000"
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default UDP ingestion address.
pub const DEFAULT_UDP_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3001));
/// Default HTTP query address.
pub const DEFAULT_HTTP_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3000));

pub const ENV_UDP_ADDR: &str = "IW_UDP_ADDR";
pub const ENV_HTTP_ADDR: &str = "IW_HTTP_ADDR";
pub const ENV_LOG_LEVEL: &str = "IW_LOG_LEVEL";
pub const ENV_JSON_LOGS: &str = "IW_JSON_LOGS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid socket address in {var}: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("invalid boolean in {var}: {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("UDP and HTTP listeners cannot share {0}")]
    AddrConflict(SocketAddr),
}

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    /// Listener addresses.
    pub network: NetworkConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// Listener addresses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// UDP socket receiving observation records.
    pub udp_addr: SocketAddr,
    /// HTTP socket serving queries.
    pub http_addr: SocketAddr,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            udp_addr: DEFAULT_UDP_ADDR,
            http_addr: DEFAULT_HTTP_ADDR,
        }
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `iw_01_ingestion=debug,info`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl NodeConfig {
    /// Parse a TOML document; missing sections and keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// `IW_LOG_LEVEL` wins over `RUST_LOG`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_UDP_ADDR) {
            self.network.udp_addr = parse_addr(ENV_UDP_ADDR, value)?;
        }
        if let Some(value) = get(ENV_HTTP_ADDR) {
            self.network.http_addr = parse_addr(ENV_HTTP_ADDR, value)?;
        }
        if let Some(level) = get(ENV_LOG_LEVEL).or_else(|| get("RUST_LOG")) {
            self.logging.level = level;
        }
        if let Some(value) = get(ENV_JSON_LOGS) {
            self.logging.json = parse_bool(ENV_JSON_LOGS, value)?;
        }
        Ok(())
    }

    /// Reject configurations the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Port 0 asks the OS for a fresh port, so it never conflicts.
        let udp = self.network.udp_addr;
        if udp == self.network.http_addr && udp.port() != 0 {
            return Err(ConfigError::AddrConflict(udp));
        }
        Ok(())
    }
}

fn parse_addr(var: &'static str, value: String) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAddr { var, value })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
