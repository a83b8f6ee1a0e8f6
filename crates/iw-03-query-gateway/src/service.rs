//! Query gateway service - owns the HTTP listener.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use crate::domain::{GatewayConfig, GatewayError};
use crate::ports::EventQueryProvider;
use crate::router::{build_router, AppState};

/// HTTP query gateway
pub struct QueryGatewayService {
    config: GatewayConfig,
    listener: TcpListener,
    state: AppState,
}

impl QueryGatewayService {
    /// Validate `config` and bind the HTTP listener.
    ///
    /// `quit` is flipped to `true` by `/quit`.
    pub async fn bind(
        config: GatewayConfig,
        provider: Arc<dyn EventQueryProvider>,
        quit: Arc<watch::Sender<bool>>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        let listener = TcpListener::bind(config.http_addr)
            .await
            .map_err(|source| GatewayError::Bind {
                addr: config.http_addr.to_string(),
                source,
            })?;

        Ok(Self {
            config,
            listener,
            state: AppState::new(provider, quit),
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr, GatewayError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` becomes `true` (or its sender is dropped),
    /// then drain in-flight requests.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> Result<(), GatewayError> {
        let addr = self.local_addr()?;
        let router = build_router(self.state, &self.config);

        info!(%addr, "HTTP query gateway started");
        axum::serve(self.listener, router)
            .with_graceful_shutdown(async move {
                while !*shutdown.borrow_and_update() {
                    // Err means the sender is gone, which is also a stop.
                    if shutdown.changed().await.is_err() {
                        break;
                    }
                }
            })
            .await?;
        info!("HTTP query gateway stopped");
        Ok(())
    }
}
