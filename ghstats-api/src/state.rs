//! App state: config, stats cache, fetcher.

use std::sync::Arc;
use std::time::Instant;

use ghstats_cache::{StatsCache, StatsFetcher};
use ghstats_core::constants::{DEFAULT_UPSTREAM_TIMEOUT_SECS, GITHUB_GRAPHQL_URL};
use ghstats_core::error::Result;
use ghstats_core::traits::StatsProvider;
use ghstats_github::{GitHubClient, GitHubConfig};

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Without a token the server still starts, but stats requests fail.
    pub github_token: Option<String>,
    pub graphql_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            github_token: None,
            graphql_url: GITHUB_GRAPHQL_URL.into(),
            timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            github_token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            graphql_url: std::env::var("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|_| GITHUB_GRAPHQL_URL.into()),
            timeout_seconds: std::env::var("GITHUB_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    /// GitHub client settings, if a token is configured.
    pub fn github_config(&self) -> Option<GitHubConfig> {
        self.github_token.as_ref().map(|token| {
            GitHubConfig::new(token.as_str())
                .with_graphql_url(self.graphql_url.as_str())
                .with_timeout(self.timeout_seconds)
        })
    }
}

pub struct AppState {
    pub config: ApiConfig,
    pub cache: Arc<StatsCache>,
    /// `None` when no GitHub token is configured.
    pub fetcher: Option<StatsFetcher>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let provider: Option<Arc<dyn StatsProvider>> = match config.github_config() {
            Some(github) => Some(Arc::new(GitHubClient::with_config(github)?)),
            None => {
                tracing::warn!("GITHUB_TOKEN is not set; stats requests will fail");
                None
            }
        };

        Ok(Self::build(config, provider))
    }

    /// State backed by an arbitrary upstream provider.
    pub fn with_provider(config: ApiConfig, provider: Arc<dyn StatsProvider>) -> Self {
        Self::build(config, Some(provider))
    }

    fn build(config: ApiConfig, provider: Option<Arc<dyn StatsProvider>>) -> Self {
        let cache = Arc::new(StatsCache::new());
        let fetcher = provider.map(|p| StatsFetcher::new(cache.clone(), p));

        Self {
            config,
            cache,
            fetcher,
            started_at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_token_means_no_fetcher() {
        let state = AppState::new(ApiConfig::default()).unwrap();
        assert!(state.fetcher.is_none());
        assert!(state.cache.is_empty());
    }

    #[test]
    fn test_token_builds_fetcher() {
        let config = ApiConfig {
            github_token: Some("ghp_test".into()),
            ..Default::default()
        };
        let state = AppState::new(config).unwrap();
        assert!(state.fetcher.is_some());
    }

    #[test]
    fn test_github_config_from_api_config() {
        let config = ApiConfig {
            github_token: Some("ghp_test".into()),
            graphql_url: "http://localhost:4000/graphql".into(),
            timeout_seconds: 3,
        };
        let github = config.github_config().unwrap();
        assert_eq!(github.token, "ghp_test");
        assert_eq!(github.graphql_url, "http://localhost:4000/graphql");
        assert_eq!(github.timeout_seconds, 3);
    }
}
