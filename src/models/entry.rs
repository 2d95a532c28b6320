use std::fmt;

use serde::Serialize;

/// Issue number taken from the `/issues/<digits>` segment of an entry URL
///
/// Holds the digits exactly as written, so leading zeros and numbers of any
/// length survive into the file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct IssueNumber(pub String);

impl IssueNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IssueNumber {
    fn from(digits: &str) -> Self {
        Self(digits.to_string())
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single question line from the history file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub category: String,
    pub title: String,
    pub url: String,
    /// Digits of the `第N天` header, kept as text
    pub day_number: String,
    pub date: String,
    pub issue: IssueNumber,
}

/// One day's section of the history file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBlock {
    pub day_number: String,
    pub date: String,
    pub entries: Vec<LogEntry>,
    /// Entry lines dropped because their URL carries no issue number
    pub discarded: usize,
}
