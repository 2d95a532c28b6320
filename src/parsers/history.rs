use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, SplitError};
use crate::models::{DayBlock, IssueNumber, LogEntry};
use crate::utils::validate_file_size;

// `- 第N天 (date)` followed by the run of entry lines belonging to that day
static DAY_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
// `- [category] [title](url)`, leading indentation allowed
static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();
static ISSUE_REGEX: OnceLock<Regex> = OnceLock::new();

fn day_block_regex() -> &'static Regex {
    DAY_BLOCK_REGEX.get_or_init(|| {
        Regex::new(
            r"- 第([0-9]+)天 \(([^)]+)\)\s*\n((?:\s*- \[[^\]]+\] \[[^\]]+\]\([^)]+\)\n?)*)",
        )
        .expect("day block pattern is valid")
    })
}

fn entry_regex() -> &'static Regex {
    ENTRY_REGEX.get_or_init(|| {
        Regex::new(r"\s*- \[([^\]]+)\] \[([^\]]+)\]\(([^)]+)\)").expect("entry pattern is valid")
    })
}

fn issue_regex() -> &'static Regex {
    ISSUE_REGEX.get_or_init(|| Regex::new(r"/issues/([0-9]+)").expect("issue pattern is valid"))
}

/// Extract the issue number from a GitHub-style issue URL
///
/// Returns `None` when the URL has no `/issues/<digits>` segment. The digits
/// are kept verbatim, leading zeros included.
pub fn extract_issue_number(url: &str) -> Option<IssueNumber> {
    issue_regex().captures(url).and_then(|caps| caps.get(1)).map(|m| IssueNumber::from(m.as_str()))
}

/// Parse history markdown into day blocks, in document order
///
/// Text that does not fit the day/entry layout is skipped without error.
/// Entries whose URL carries no issue number are dropped and counted in
/// [`DayBlock::discarded`].
pub fn parse_history(content: &str) -> Vec<DayBlock> {
    let mut days = Vec::new();

    for caps in day_block_regex().captures_iter(content) {
        let day_number = caps[1].to_string();
        let date = caps[2].to_string();
        let block = caps.get(3).map_or("", |m| m.as_str());

        let mut entries = Vec::new();
        let mut discarded = 0;

        for entry in entry_regex().captures_iter(block) {
            let category = &entry[1];
            let title = &entry[2];
            let url = &entry[3];

            let Some(issue) = extract_issue_number(url) else {
                tracing::debug!(
                    "day {}: no issue number in {}, skipping [{}] {}",
                    day_number,
                    url,
                    category,
                    title
                );
                discarded += 1;
                continue;
            };

            entries.push(LogEntry {
                category: category.to_string(),
                title: title.to_string(),
                url: url.to_string(),
                day_number: day_number.clone(),
                date: date.clone(),
                issue,
            });
        }

        days.push(DayBlock { day_number, date, entries, discarded });
    }

    days
}

/// Parse history markdown into a flat list of entries, in document order
pub fn parse_entries(content: &str) -> Vec<LogEntry> {
    parse_history(content).into_iter().flat_map(|day| day.entries).collect()
}

/// Read and parse a history file
///
/// # Errors
///
/// - [`SplitError::MissingInput`] if the file does not exist
/// - [`SplitError::InputTooLarge`] if the file is over 10MB
/// - [`SplitError::ReadInput`] if the file cannot be read or is not UTF-8
pub fn parse_history_file(path: &Path) -> Result<Vec<DayBlock>> {
    let content = read_history_file(path)?;
    Ok(parse_history(&content))
}

/// Read a history file into memory after the existence and size checks
pub fn read_history_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SplitError::MissingInput(path.to_path_buf()),
        _ => SplitError::ReadInput { path: path.to_path_buf(), source },
    })?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| SplitError::ReadInput { path: path.to_path_buf(), source })?;

    Ok(content)
}
