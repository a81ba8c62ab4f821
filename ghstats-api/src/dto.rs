//! DTOs for API responses.
//!
//! Successful stats lookups serialize [`UserStats`](ghstats_core::UserStats)
//! directly, so only the auxiliary responses live here.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status
    pub status: String,
    /// Version
    pub version: String,
    /// Seconds since the server state was created
    pub uptime_seconds: u64,
    /// Entries currently held by the stats cache, stale ones included
    pub cached_users: usize,
    /// Whether a GitHub token is configured
    pub github_configured: bool,
}
