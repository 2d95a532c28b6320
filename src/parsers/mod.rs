//! Markdown parser for the question history file
//!
//! # Error Handling Strategy
//!
//! Parsing is best-effort, matching the fixed layout of the history file:
//!
//! - **Layout mismatches**: Day headers or entry lines that do not fit the expected
//!   markdown shape are not matched and therefore silently skipped.
//!
//! - **Entries without an issue number**: Dropped, logged at `debug`, and counted per day
//!   in [`DayBlock::discarded`](crate::models::DayBlock::discarded).
//!
//! - **File-level errors**: A missing, oversized, unreadable or non-UTF-8 file is reported as
//!   a [`SplitError`](crate::error::SplitError) before anything is written.

pub mod history;

pub use history::{
    extract_issue_number, parse_entries, parse_history, parse_history_file, read_history_file,
};
