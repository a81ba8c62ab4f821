//! Common traits for ghstats.
//!
//! The fetcher talks to GitHub only through [`StatsProvider`], which keeps the
//! cache orchestration testable without a network.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::UserStats;

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM PROVIDER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Source of fresh statistics for a user.
///
/// Implementations might use:
/// - The GitHub GraphQL API (production)
/// - A canned or counting provider (tests)
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Computes lifetime commit and repository statistics for `username`.
    ///
    /// Fails with [`StatsError::UserNotFound`](crate::StatsError::UserNotFound)
    /// if the login does not exist, or
    /// [`StatsError::UpstreamError`](crate::StatsError::UpstreamError) on any
    /// transport or protocol failure.
    async fn user_stats(&self, username: &str) -> Result<UserStats>;
}
