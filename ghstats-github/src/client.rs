//! GitHub GraphQL client for user statistics.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use futures::future::try_join_all;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument, warn};

use ghstats_core::constants::GRAPHQL_NOT_FOUND;
use ghstats_core::error::{Result, StatsError};
use ghstats_core::traits::StatsProvider;
use ghstats_core::types::{ReposCount, UserStats};

use crate::config::GitHubConfig;
use crate::queries::{
    year_bounds, ContributionsUser, CreatedAtUser, GraphQlResponse, RepositoryStatsUser, UserData,
    CONTRIBUTIONS_FOR_YEAR, REPOSITORY_STATS, USER_CREATED_AT,
};

/// Repository half of a user's stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepositoryStats {
    /// Public plus private repositories
    pub total_repos: u64,
    /// Owned / non-fork / private breakdown
    pub repos_count: ReposCount,
}

/// GitHub GraphQL client.
///
/// Each call is a single attempt; failures are mapped onto [`StatsError`]
/// and returned without retrying.
pub struct GitHubClient {
    config: GitHubConfig,
    http_client: reqwest::Client,
}

impl GitHubClient {
    /// Creates a client for the public GitHub API with the given token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(GitHubConfig::new(token))
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghstats/", env!("CARGO_PKG_VERSION"))),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| StatsError::upstream(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Fetches commit and repository stats concurrently.
    ///
    /// If either half fails the other is dropped and the error is returned,
    /// so a partial result never escapes.
    #[instrument(skip(self))]
    pub async fn get_user_stats(&self, username: &str) -> Result<UserStats> {
        let (commits, repos) =
            futures::try_join!(self.total_commits(username), self.repository_stats(username))?;

        Ok(UserStats::new(commits, repos.total_repos, repos.repos_count))
    }

    /// Lifetime contribution total through the current UTC year.
    pub async fn total_commits(&self, username: &str) -> Result<u64> {
        self.total_commits_until(username, Utc::now().year()).await
    }

    /// Sums yearly contribution totals from the signup year to `current_year`,
    /// both inclusive.
    ///
    /// Each year is queried as a full calendar year, so contributions made in
    /// the signup year before the signup date are still counted if GitHub
    /// reports them. A signup year later than `current_year` yields 0.
    #[instrument(skip(self))]
    pub async fn total_commits_until(&self, username: &str, current_year: i32) -> Result<u64> {
        let created_at = self.user_created_at(username).await?;
        let first_year = created_at.year();

        let years: Vec<i32> = (first_year..=current_year).collect();
        debug!(username, first_year, current_year, queries = years.len(), "Summing yearly contributions");

        let totals = try_join_all(
            years
                .iter()
                .map(|&year| self.contributions_for_year(username, year)),
        )
        .await?;

        Ok(totals.into_iter().sum())
    }

    /// Repository totals from a single aggregate query.
    #[instrument(skip(self))]
    pub async fn repository_stats(&self, username: &str) -> Result<RepositoryStats> {
        let user: RepositoryStatsUser = self
            .query_user(username, REPOSITORY_STATS, json!({ "username": username }))
            .await?;

        let private = user.total_private.total_count;

        Ok(RepositoryStats {
            total_repos: user.total_public.total_count + private,
            repos_count: ReposCount::new(user.owned.total_count, user.original.total_count, private),
        })
    }

    async fn user_created_at(&self, username: &str) -> Result<chrono::DateTime<Utc>> {
        let user: CreatedAtUser = self
            .query_user(username, USER_CREATED_AT, json!({ "username": username }))
            .await?;
        Ok(user.created_at)
    }

    async fn contributions_for_year(&self, username: &str, year: i32) -> Result<u64> {
        let (from, to) = year_bounds(year);

        let user: ContributionsUser = self
            .query_user(
                username,
                CONTRIBUTIONS_FOR_YEAR,
                json!({ "username": username, "from": from, "to": to }),
            )
            .await?;

        let total = user.contributions_collection.contribution_calendar.total_contributions;
        debug!(username, year, total, "Yearly contributions");
        Ok(total)
    }

    /// Posts a query whose `data` is `{ user: U | null }` and unwraps the user.
    async fn query_user<U: DeserializeOwned>(
        &self,
        username: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<U> {
        let response = self
            .http_client
            .post(&self.config.graphql_url)
            .header(AUTHORIZATION, format!("bearer {}", self.config.token))
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| StatsError::upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(username, %status, "GitHub API returned an error status");
            return Err(StatsError::upstream(format!(
                "GitHub API request failed: {}",
                status
            )));
        }

        let body: GraphQlResponse<UserData<U>> = response
            .json()
            .await
            .map_err(|e| StatsError::upstream(e.to_string()))?;

        if !body.errors.is_empty() {
            if body
                .errors
                .iter()
                .any(|e| e.kind.as_deref() == Some(GRAPHQL_NOT_FOUND))
            {
                return Err(StatsError::UserNotFound(username.to_string()));
            }

            let messages: Vec<&str> = body.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(StatsError::upstream(format!(
                "GitHub API error: {}",
                messages.join(", ")
            )));
        }

        body.data
            .and_then(|d| d.user)
            .ok_or_else(|| StatsError::UserNotFound(username.to_string()))
    }
}

#[async_trait]
impl StatsProvider for GitHubClient {
    async fn user_stats(&self, username: &str) -> Result<UserStats> {
        self.get_user_stats(username).await
    }
}
