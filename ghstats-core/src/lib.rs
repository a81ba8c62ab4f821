//! # ghstats Core
//!
//! Core types, errors, and traits shared by the ghstats crates.
//!
//! - **Types**: [`UserStats`] and [`ReposCount`], the JSON shape served to clients
//! - **Errors**: the closed [`StatsError`] taxonomy every fetch resolves to
//! - **Constants**: cache TTL and upstream defaults
//! - **Traits**: [`StatsProvider`], the seam between the fetcher and GitHub
//!
//! ## Example
//!
//! ```rust
//! use ghstats_core::{ReposCount, UserStats};
//!
//! let stats = UserStats::new(42, 5, ReposCount::new(3, 4, 1));
//! let json = serde_json::to_string(&stats).unwrap();
//! assert!(json.contains("\"total_repos\":5"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, StatsError};
pub use traits::*;
pub use types::*;
