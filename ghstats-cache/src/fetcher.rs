//! Cache-first stats lookup.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use ghstats_core::error::{Result, StatsError};
use ghstats_core::traits::StatsProvider;
use ghstats_core::types::UserStats;

use crate::cache::StatsCache;

/// Rejects a missing username before it reaches the cache or upstream.
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(StatsError::InvalidInput("Username is required".into()));
    }
    Ok(())
}

/// Serves stats for a username, preferring the cache.
///
/// Resolves a request by:
/// 1. Validating the username
/// 2. Returning a live cache entry without touching upstream
/// 3. Otherwise asking the [`StatsProvider`] for fresh stats
/// 4. Caching only a successful result
///
/// Failures are returned unchanged and never cached, so the next request for
/// the same name tries upstream again. There are no automatic retries.
#[derive(Clone)]
pub struct StatsFetcher {
    cache: Arc<StatsCache>,
    provider: Arc<dyn StatsProvider>,
}

impl StatsFetcher {
    /// Creates a fetcher over a shared cache and upstream provider.
    pub fn new(cache: Arc<StatsCache>, provider: Arc<dyn StatsProvider>) -> Self {
        Self { cache, provider }
    }

    /// Returns stats for `username`.
    #[instrument(skip(self))]
    pub async fn fetch_stats(&self, username: &str) -> Result<UserStats> {
        validate_username(username)?;

        if let Some(entry) = self.cache.get(username) {
            debug!(username, "Cache hit");
            return Ok(entry.stats());
        }

        debug!(username, "Cache miss, fetching from upstream");

        let stats = match self.provider.user_stats(username).await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(username, error = %e, "Upstream fetch failed");
                return Err(e);
            }
        };

        self.cache
            .put(username, stats.commits, stats.total_repos, stats.repos_count);

        info!(
            username,
            commits = stats.commits,
            total_repos = stats.total_repos,
            "Fetched fresh stats"
        );

        Ok(stats)
    }

    /// The cache this fetcher reads and writes.
    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }
}
