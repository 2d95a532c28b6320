//! History Splitter - turn a markdown question history into a tree of stub files
//!
//! The input is a changelog of daily interview questions, one `- 第N天 (date)` header per
//! day followed by `- [category] [title](url)` lines. This library:
//!
//! - Parses day blocks and entries from the markdown
//! - Extracts the issue number from each entry URL
//! - Sanitizes titles for use in filenames
//! - Writes one stub per entry to `<output_dir>/<category>/<date>_<issue>.<title>.md`,
//!   never touching files that already exist
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use history_splitter::{SplitterConfig, split_history};
//!
//! let config = SplitterConfig {
//!     input_file: PathBuf::from("category/history.md"),
//!     output_dir: PathBuf::from("split_questions_by_category"),
//! };
//! let summary = split_history(&config)?;
//! println!("Created {} of {} files", summary.created, summary.total);
//! # Ok::<(), history_splitter::SplitError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod splitter;
pub mod utils;

// Re-export commonly used types
pub use config::SplitterConfig;
pub use error::SplitError;
pub use models::{DayBlock, IssueNumber, LogEntry, SplitSummary};
pub use parsers::{parse_history, parse_history_file};
pub use splitter::split_history;
pub use utils::{format_path_with_tilde, sanitize_title};
