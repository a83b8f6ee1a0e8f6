//! `ipwatch` binary: loads configuration and runs the node until `/quit`
//! or Ctrl-C.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use node_runtime::telemetry::init_tracing;
use node_runtime::{NodeConfig, NodeRuntime};

/// Aggregates IP observations per application and classifies them.
#[derive(Debug, Parser)]
#[command(name = "ipwatch", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// UDP listen address (overrides config and IW_UDP_ADDR)
    #[arg(long, value_name = "ADDR")]
    udp: Option<SocketAddr>,

    /// HTTP listen address (overrides config and IW_HTTP_ADDR)
    #[arg(long, value_name = "ADDR")]
    http: Option<SocketAddr>,

    /// Log filter directive (overrides config, IW_LOG_LEVEL and RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn into_config(self) -> Result<NodeConfig> {
        let mut config = NodeConfig::load(self.config.as_deref())?;
        if let Some(udp) = self.udp {
            config.network.udp_addr = udp;
        }
        if let Some(http) = self.http {
            config.network.http_addr = http;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse()
        .into_config()
        .context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!(
        udp = %config.network.udp_addr,
        http = %config.network.http_addr,
        "Starting ipwatch"
    );

    let runtime = NodeRuntime::bind(&config).await?;
    let shutdown = runtime.shutdown_handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C, shutting down");
                shutdown.trigger();
            }
            // Still stoppable through /quit.
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    runtime.run().await?;
    Ok(())
}
