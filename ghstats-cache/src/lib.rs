//! Expiring per-user stats cache for ghstats.
//!
//! [`StatsCache`] holds the last computed [`UserStats`](ghstats_core::UserStats)
//! per username with lazy, read-time expiry. [`StatsFetcher`] layers the
//! cache-first lookup over any [`StatsProvider`](ghstats_core::StatsProvider).

mod cache;
mod fetcher;

pub use cache::{CacheEntry, StatsCache};
pub use fetcher::{validate_username, StatsFetcher};
