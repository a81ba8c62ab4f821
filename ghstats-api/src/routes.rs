//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Stats
        .route("/api/commits/:username", get(handlers::get_user_stats))
        .route("/api/commits", get(handlers::missing_username))
        .route("/api/commits/", get(handlers::missing_username))

        .with_state(state)
}
