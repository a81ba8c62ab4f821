//! In-memory TTL cache for per-user stats.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use ghstats_core::constants::STATS_CACHE_TTL;
use ghstats_core::types::{ReposCount, UserStats};

/// Cached stats for one username.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// Lifetime commit total
    pub commits: u64,
    /// Public plus private repositories
    pub total_repos: u64,
    /// Repository breakdown
    pub repos_count: ReposCount,
    /// When the entry was written
    pub timestamp: Instant,
}

impl CacheEntry {
    /// An entry is valid while `now - timestamp <= ttl`.
    fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.timestamp) > ttl
    }

    /// Returns the cached values without the write timestamp.
    pub fn stats(&self) -> UserStats {
        UserStats::new(self.commits, self.total_repos, self.repos_count)
    }
}

/// Expiring username -> stats store.
///
/// Thread-safe behind a single lock. Expiry is lazy: a stale entry is only
/// dropped when a read finds it, there is no background sweep, so keys that
/// are written once and never read again stay resident until [`clear`].
///
/// Keys are case-sensitive and stored as given.
///
/// [`clear`]: StatsCache::clear
pub struct StatsCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl StatsCache {
    /// Creates an empty cache using [`STATS_CACHE_TTL`].
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: STATS_CACHE_TTL,
        }
    }

    /// Gets the entry for `key` if present and not expired.
    ///
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.get_at(key, Instant::now())
    }

    /// Same as [`get`](Self::get), evaluating expiry against `now`.
    pub fn get_at(&self, key: &str, now: Instant) -> Option<CacheEntry> {
        let entries = self.entries.upgradable_read();

        match entries.get(key) {
            None => return None,
            Some(e) if !e.is_expired_at(now, self.ttl) => return Some(e.clone()),
            Some(_) => {}
        }

        let mut entries = RwLockUpgradableReadGuard::upgrade(entries);
        entries.remove(key);
        None
    }

    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub fn put(&self, key: &str, commits: u64, total_repos: u64, repos_count: ReposCount) {
        let entry = CacheEntry {
            commits,
            total_repos,
            repos_count,
            timestamp: Instant::now(),
        };
        self.entries.write().insert(key.to_owned(), entry);
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of stored entries, including stale ones not yet read.
    pub fn size(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos() -> ReposCount {
        ReposCount::new(3, 4, 1)
    }

    #[test]
    fn test_cache_put_get() {
        let cache = StatsCache::new();
        cache.put("alice", 42, 5, repos());

        let entry = cache.get("alice").unwrap();
        assert_eq!(entry.stats(), UserStats::new(42, 5, repos()));
    }

    #[test]
    fn test_cache_miss() {
        let cache = StatsCache::new();
        assert!(cache.get("nobody").is_none());
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_cache_keys_are_case_sensitive() {
        let cache = StatsCache::new();
        cache.put("Alice", 1, 1, repos());
        assert!(cache.get("alice").is_none());
        assert!(cache.get("Alice").is_some());
    }

    #[test]
    fn test_cache_isolation_across_keys() {
        let cache = StatsCache::new();
        cache.put("bob", 7, 2, ReposCount::new(1, 1, 0));
        cache.put("alice", 42, 5, repos());

        let bob = cache.get("bob").unwrap();
        assert_eq!(bob.commits, 7);
        assert_eq!(bob.repos_count, ReposCount::new(1, 1, 0));
    }

    #[test]
    fn test_cache_replace_not_merge() {
        let cache = StatsCache::new();
        cache.put("alice", 10, 9, ReposCount::new(8, 7, 6));
        cache.put("alice", 1, 2, ReposCount::new(3, 0, 0));

        let entry = cache.get("alice").unwrap();
        assert_eq!(entry.stats(), UserStats::new(1, 2, ReposCount::new(3, 0, 0)));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_cache_expiry_removes_entry() {
        let cache = StatsCache::new();
        cache.put("alice", 42, 5, repos());
        let written = cache.get("alice").unwrap().timestamp;

        let later = written + STATS_CACHE_TTL + Duration::from_secs(1);
        assert!(cache.get_at("alice", later).is_none());
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_cache_valid_at_exact_ttl() {
        let cache = StatsCache::new();
        cache.put("alice", 42, 5, repos());
        let written = cache.get("alice").unwrap().timestamp;

        assert!(cache.get_at("alice", written + STATS_CACHE_TTL).is_some());
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_cache_size_counts_stale_entries() {
        let cache = StatsCache::new();
        cache.put("alice", 1, 1, repos());
        cache.put("bob", 2, 2, repos());
        let written = cache.get("bob").unwrap().timestamp;

        // Only the key that is read gets collected.
        let later = written + STATS_CACHE_TTL + Duration::from_secs(1);
        assert!(cache.get_at("bob", later).is_none());
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let cache = StatsCache::new();
        cache.put("alice", 1, 1, repos());
        cache.put("bob", 2, 2, repos());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("alice").is_none());
    }

    #[test]
    fn test_cache_concurrent_distinct_keys() {
        let cache = StatsCache::new();

        std::thread::scope(|s| {
            for t in 0..8u64 {
                let cache = &cache;
                s.spawn(move || {
                    let key = format!("user-{}", t);
                    for round in 0..100u64 {
                        cache.put(&key, t * 1000 + round, t, repos());
                        assert!(cache.get(&key).is_some());
                    }
                });
            }
        });

        assert_eq!(cache.size(), 8);
        for t in 0..8u64 {
            let entry = cache.get(&format!("user-{}", t)).unwrap();
            assert_eq!(entry.commits, t * 1000 + 99);
            assert_eq!(entry.total_repos, t);
        }
    }

    #[test]
    fn test_cache_concurrent_same_key() {
        let cache = StatsCache::new();

        std::thread::scope(|s| {
            for t in 1..=8u64 {
                let cache = &cache;
                s.spawn(move || {
                    for _ in 0..200 {
                        // Every field of a write carries the writer id.
                        cache.put("shared", t, t, ReposCount::new(t, t, t));
                        if let Some(entry) = cache.get("shared") {
                            let w = entry.commits;
                            assert_eq!(entry.stats(), UserStats::new(w, w, ReposCount::new(w, w, w)));
                        }
                    }
                });
            }
        });

        assert_eq!(cache.size(), 1);
        let entry = cache.get("shared").unwrap();
        let w = entry.commits;
        assert!((1..=8).contains(&w));
        assert_eq!(entry.stats(), UserStats::new(w, w, ReposCount::new(w, w, w)));
    }

    mod props {
        use crate::cache::StatsCache;
        use ghstats_core::types::{ReposCount, UserStats};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reads_are_idempotent(key in "[a-zA-Z0-9-]{0,39}", commits in any::<u64>(), put in any::<bool>()) {
                let cache = StatsCache::new();
                if put {
                    cache.put(&key, commits, 1, ReposCount::default());
                }
                prop_assert_eq!(cache.get(&key), cache.get(&key));
            }

            #[test]
            fn last_put_wins(key in "[a-z]{1,12}", first in any::<(u64, u64)>(), second in any::<(u64, u64)>()) {
                let cache = StatsCache::new();
                cache.put(&key, first.0, first.1, ReposCount::new(first.0, 0, 0));
                cache.put(&key, second.0, second.1, ReposCount::new(0, second.1, 0));

                let entry = cache.get(&key).unwrap();
                prop_assert_eq!(entry.stats(), UserStats::new(second.0, second.1, ReposCount::new(0, second.1, 0)));
            }
        }
    }
}
