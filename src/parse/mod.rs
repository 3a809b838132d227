//! Line parsers for the two text formats fed into a [`Report`](crate::report::Report).
//!
//! Both parsers are line oriented: blank lines are ignored and malformed lines
//! are logged and skipped, never fatal.

pub mod blame;
pub mod history;

pub use blame::{apply_blame, BlameLine};
pub use history::{apply_history, HistoryLine};

use serde::Serialize;

/// Per-pass line accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    /// Non-blank lines read.
    pub lines: usize,
    /// Lines that changed the ledger.
    pub applied: usize,
    /// Change lines outside the requested subtree.
    pub filtered: usize,
    /// Lines dropped because their author is suppressed.
    pub suppressed: usize,
    /// Malformed lines.
    pub skipped: usize,
}
