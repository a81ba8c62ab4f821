//! Error types for ghstats.
//!
//! Every failed stats fetch resolves to exactly one [`StatsError`] variant, so
//! callers branch exhaustively instead of matching on message strings.

use thiserror::Error;

/// Result type alias using `StatsError`.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Failure of a stats fetch.
///
/// The cache itself never fails; these only come out of validation and the
/// upstream call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Username missing or malformed. Never reaches the cache.
    #[error("{0}")]
    InvalidInput(String),

    /// Upstream confirmed the user does not exist. Not cached.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Transport or protocol failure talking to GitHub. Not retried, not cached.
    #[error("{0}")]
    UpstreamError(String),
}

impl StatsError {
    /// Shorthand for an upstream failure.
    pub fn upstream(message: impl Into<String>) -> Self {
        StatsError::UpstreamError(message.into())
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            StatsError::InvalidInput(_) => "INVALID_INPUT",
            StatsError::UserNotFound(_) => "USER_NOT_FOUND",
            StatsError::UpstreamError(_) => "UPSTREAM_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StatsError::InvalidInput("x".into()), "INVALID_INPUT" ; "invalid input")]
    #[test_case(StatsError::UserNotFound("x".into()), "USER_NOT_FOUND" ; "not found")]
    #[test_case(StatsError::upstream("x"), "UPSTREAM_ERROR" ; "upstream")]
    fn test_error_codes(err: StatsError, code: &str) {
        assert_eq!(err.code(), code);
    }

    #[test]
    fn test_upstream_message_passes_through() {
        let err = StatsError::upstream("GitHub API request failed: 502 Bad Gateway");
        assert_eq!(err.to_string(), "GitHub API request failed: 502 Bad Gateway");
    }
}
