//! # ghstats GitHub client
//!
//! Computes [`UserStats`](ghstats_core::UserStats) from the GitHub GraphQL API:
//! a lifetime commit total summed over one contribution-calendar query per
//! year since signup, and a single aggregate query for repository counts.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod config;
mod queries;

pub use client::{GitHubClient, RepositoryStats};
pub use config::GitHubConfig;
