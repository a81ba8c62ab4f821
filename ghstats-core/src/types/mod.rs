//! Domain types for ghstats.
//!
//! - [`UserStats`]: commit and repository totals served for one user
//! - [`ReposCount`]: breakdown of repository counts

mod stats;

pub use stats::*;
