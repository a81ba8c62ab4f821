//! Constants for ghstats.
//!
//! The cache TTL is fixed at compile time; it is not a runtime setting.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// How long a cached [`UserStats`](crate::UserStats) entry stays valid.
///
/// An entry written at `T` is still served at exactly `T + STATS_CACHE_TTL`
/// and dropped on the first read after that.
pub const STATS_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

// ═══════════════════════════════════════════════════════════════════════════════
// GITHUB UPSTREAM
// ═══════════════════════════════════════════════════════════════════════════════

/// GitHub GraphQL endpoint.
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Default upstream request timeout in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// GraphQL error `type` GitHub uses when a login does not resolve to a user.
pub const GRAPHQL_NOT_FOUND: &str = "NOT_FOUND";
