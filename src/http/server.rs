//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, CORS)
//! - Gate the send/roster routes behind the bearer token
//! - Bind server to listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::gateway::GatewayClient;
use crate::http::auth::require_bearer;
use crate::http::handlers;
use crate::http::request::request_id_middleware;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub gateway: Arc<GatewayClient>,
}

/// HTTP server for the SMS relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            gateway: Arc::new(GatewayClient::new(config.gateway.clone())),
            config: Arc::new(config.clone()),
        };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        // Send and roster routes sit behind the bearer gate; the config
        // probe stays open so the front-end can bootstrap itself.
        let gated = Router::new()
            .route("/sms", post(handlers::sms_send))
            .route("/sms/bulk", post(handlers::sms_send_bulk))
            .route("/roster", post(handlers::roster_normalize))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_bearer,
            ));

        let api = Router::new()
            .route("/sms/config", get(handlers::sms_config))
            .merge(gated);

        Router::new()
            .route("/", get(handlers::health))
            .nest("/api", api)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(request_id_middleware))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    // The bundled front-end is served from anywhere during
                    // manual testing; the bearer gate does the real guarding.
                    .layer(CorsLayer::permissive()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
