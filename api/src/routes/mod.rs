//! API route definitions

pub mod info;
pub mod leaderboard;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Build the full application router
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root endpoint with API info
        .route("/", get(info::root))
        // Health check
        .route("/health", get(health_check))
        // Leaderboard routes
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route("/leaderboard/:address", get(leaderboard::get_holder))
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
