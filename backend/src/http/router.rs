//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    // The dashboard is embedded in third-party pages, so any origin is allowed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/analyze", post(handlers::analyze_tickets))
        .route("/sample-tickets", get(handlers::get_sample_tickets));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Unversioned alias used by existing dashboard builds
        .route("/analyze", post(handlers::analyze_tickets))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
