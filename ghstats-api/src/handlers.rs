//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use ghstats_cache::validate_username;
use ghstats_core::types::UserStats;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /api/commits/:username
pub async fn get_user_stats(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<UserStats>> {
    validate_username(&username)?;

    let fetcher = state
        .fetcher
        .as_ref()
        .ok_or_else(ApiError::token_not_configured)?;

    let stats = fetcher.fetch_stats(&username).await?;
    Ok(Json(stats))
}

/// GET /api/commits/ with no username segment
pub async fn missing_username() -> ApiError {
    ApiError::bad_request("Username is required")
}

/// GET /health
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        cached_users: state.cache.size(),
        github_configured: state.config.github_token.is_some(),
    })
}
