//! Statistics served for a GitHub user.

use serde::{Deserialize, Serialize};

/// Repository count breakdown.
///
/// The three counts come from independent upstream queries; they may overlap
/// and need not sum to [`UserStats::total_repos`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReposCount {
    /// Repositories owned by the user
    pub owned: u64,
    /// Repositories that are not forks
    pub original: u64,
    /// Private repositories visible to the token
    pub private: u64,
}

impl ReposCount {
    /// Creates a new breakdown.
    pub fn new(owned: u64, original: u64, private: u64) -> Self {
        Self {
            owned,
            original,
            private,
        }
    }
}

/// Aggregated statistics for one user, as returned to API clients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Lifetime contribution total across every calendar year since signup
    pub commits: u64,
    /// Public plus private repositories
    pub total_repos: u64,
    /// Repository breakdown
    pub repos_count: ReposCount,
}

impl UserStats {
    /// Creates a new stats value.
    pub fn new(commits: u64, total_repos: u64, repos_count: ReposCount) -> Self {
        Self {
            commits,
            total_repos,
            repos_count,
        }
    }
}
