//! Data models for the history splitter.
//!
//! - [`LogEntry`] - one `- [category] [title](url)` line with its day context
//! - [`DayBlock`] - a `- 第N天 (date)` section and the entries under it
//! - [`IssueNumber`] - issue digits taken verbatim from an entry URL
//! - [`SplitSummary`] - counters reported after a split run

pub mod entry;
pub mod summary;

pub use entry::{DayBlock, IssueNumber, LogEntry};
pub use summary::SplitSummary;
