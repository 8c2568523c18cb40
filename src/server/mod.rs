//! HTTP server for HTML table to CSV conversion
//!
//! Routes:
//! - `GET /` landing page
//! - `GET /favicon.ico` from the configured assets directory
//! - `GET /health`
//! - `POST /api/html` conversion endpoint

mod errors;
mod form;
mod handlers;
mod types;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;

pub use errors::ApiError;
pub use form::decode_form_content;
pub use handlers::*;
pub use types::*;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Build the router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let favicon = ServeFile::new(state.config.assets_dir().join("favicon.ico"));

    Router::new()
        .route("/", get(index))
        .route_service("/favicon.ico", favicon)
        .route("/health", get(health_check))
        .route("/api/html", post(convert_html))
        // Middleware
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Bind the configured address and serve
pub async fn start_server(state: AppState) -> Result<(), std::io::Error> {
    info!("Starting table2csv server on {}", state.config.bind_addr());

    let listener = TcpListener::bind(state.config.bind_addr()).await?;
    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
