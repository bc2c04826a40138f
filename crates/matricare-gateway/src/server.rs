// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the chat endpoint.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use matricare_core::MatricareError;
use matricare_router::QueryRouter;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared state for axum request handlers.
///
/// The router is constructed once at startup and read-only thereafter, so
/// concurrent requests share it without locking.
#[derive(Clone)]
pub struct GatewayState {
    /// The query router handling every chat request.
    pub router: Arc<QueryRouter>,
}

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the axum application with all routes and middleware.
pub fn build_app(state: GatewayState) -> Router {
    Router::new()
        .route("/chat", post(handlers::post_chat))
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until shutdown.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), MatricareError> {
    let app = build_app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        MatricareError::Internal(format!("failed to bind gateway to {addr}: {e}"))
    })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| MatricareError::Internal(format!("gateway server error: {e}")))
}
