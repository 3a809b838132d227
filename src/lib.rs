//! Turns git history and blame output into a ranked per-author contribution
//! report.
//!
//! Three text sources are folded into one [`report::Report`]: the numstat
//! history, a blame summary of every tracked file and a blame summary of
//! selected files. Scoring runs once all three passes are done, because every
//! score is a share of the final totals.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod identity;
pub mod model;
pub mod output;
pub mod parse;
pub mod period;
pub mod rank;
pub mod report;
pub mod score;
pub mod stats;
pub mod util;

pub use config::Config;
pub use error::{GitRankError, Result};
pub use report::Report;
pub use stats::parse_stats;
