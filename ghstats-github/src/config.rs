//! GitHub client configuration.

use serde::{Deserialize, Serialize};

use ghstats_core::constants::{DEFAULT_UPSTREAM_TIMEOUT_SECS, GITHUB_GRAPHQL_URL};

/// GitHub client configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// GraphQL endpoint (overridable for GitHub Enterprise or tests)
    pub graphql_url: String,
    /// Personal access token sent as a bearer credential
    #[serde(skip_serializing)]
    pub token: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            graphql_url: GITHUB_GRAPHQL_URL.into(),
            token: String::new(),
            timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl GitHubConfig {
    /// Creates a config for the public GitHub API with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Points the client at a different GraphQL endpoint.
    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("graphql_url", &self.graphql_url)
            .field("token", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
