//! HTTP routes.
//!
//! | Path | Methods | Behavior |
//! |------|---------|----------|
//! | `/events/:key` | GET | classification JSON, `404` for a malformed key, `500 Not found` for an unseen one |
//! | `/reset` | GET, POST | clear the store |
//! | `/quit` | GET, POST | request process shutdown |
//! | `/health` | GET | store summary |
//!
//! Error bodies are plain text terminated by a newline, and any other path
//! answers `404 page not found`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use shared_types::AppKey;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{debug, error, info};

use crate::domain::{GatewayConfig, QueryError};
use crate::ports::EventQueryProvider;

const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn EventQueryProvider>,
    pub quit: Arc<watch::Sender<bool>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn EventQueryProvider>, quit: Arc<watch::Sender<bool>>) -> Self {
        Self { provider, quit }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    applications: usize,
    observations: u64,
}

/// Build the gateway router with its middleware stack
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout));

    Router::new()
        .route("/events/:key", get(handle_events))
        .route("/reset", get(handle_reset).post(handle_reset))
        .route("/quit", get(handle_quit).post(handle_quit))
        .route("/health", get(handle_health))
        .fallback(handle_fallback)
        .layer(middleware)
        .with_state(state)
}

async fn handle_events(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let app_key = match AppKey::parse(&key) {
        Ok(app_key) => app_key,
        Err(e) => {
            debug!(error = %e, "Rejecting events path");
            return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
        }
    };

    match state.provider.events_json(&app_key) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            match &e {
                QueryError::NotFound => debug!(app_key = %app_key, "Query for unknown application"),
                QueryError::Internal(detail) => error!(app_key = %app_key, %detail, "Query failed"),
            }
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}\n")).into_response()
        }
    }
}

async fn handle_fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    state.provider.reset();
    StatusCode::OK
}

async fn handle_quit(State(state): State<AppState>) -> StatusCode {
    info!("Shutdown requested over HTTP");
    state.quit.send_replace(true);
    StatusCode::OK
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let health = state.provider.health();
    Json(HealthResponse {
        status: "ok",
        applications: health.applications,
        observations: health.observations,
    })
}
