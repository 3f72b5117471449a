//! Application startup and lifecycle management.
//!
//! Builds the HTTP server around shared state and runs it until a shutdown
//! signal arrives.

use crate::config::RelayConfig;
use crate::handlers::{chat_handler, chat_preflight};
use crate::services::GenerationClient;
use axum::{
    Json, Router,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use service_core::error::AppError;
use service_core::middleware::{cors::cors_headers_middleware, tracing::request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub generation: Arc<GenerationClient>,
}

/// Health check endpoint for liveness probes. The relay holds no connections
/// of its own, so liveness is unconditional.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "chat-relay-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint.
async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler).options(chat_preflight))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // Fixed CORS headers on every response, error paths included
        .layer(from_fn(cors_headers_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let generation = Arc::new(GenerationClient::new(&config.generation)?);

        tracing::info!(
            endpoint = %config.generation.base_url,
            timeout_secs = config.generation.timeout_secs,
            "Initialized generation client"
        );

        let state = AppState {
            config: config.clone(),
            generation,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
