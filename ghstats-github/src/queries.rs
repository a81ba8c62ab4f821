//! GraphQL documents and response shapes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub(crate) const USER_CREATED_AT: &str = r#"
query GetUser($username: String!) {
  user(login: $username) {
    createdAt
  }
}
"#;

pub(crate) const CONTRIBUTIONS_FOR_YEAR: &str = r#"
query GetContributions($username: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $username) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
      }
    }
  }
}
"#;

pub(crate) const REPOSITORY_STATS: &str = r#"
query GetRepositoryStats($username: String!) {
  user(login: $username) {
    totalPublic: repositories(privacy: PUBLIC) {
      totalCount
    }
    totalPrivate: repositories(privacy: PRIVATE) {
      totalCount
    }
    owned: repositories(ownerAffiliations: [OWNER]) {
      totalCount
    }
    original: repositories(isFork: false) {
      totalCount
    }
  }
}
"#;

/// Full-year window for one contribution calendar query.
///
/// Always Jan 1 to Dec 31, even for the signup year.
pub(crate) fn year_bounds(year: i32) -> (String, String) {
    (
        format!("{:04}-01-01T00:00:00Z", year),
        format!("{:04}-12-31T23:59:59Z", year),
    )
}

/// GraphQL envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `data` of every query here: a nullable `user` field.
#[derive(Debug, Deserialize)]
pub(crate) struct UserData<U> {
    pub user: Option<U>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatedAtUser {
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionsUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionCalendar {
    pub total_contributions: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryStatsUser {
    pub total_public: Connection,
    pub total_private: Connection,
    pub owned: Connection,
    pub original: Connection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Connection {
    pub total_count: u64,
}
