//! Split run: history file in, one stub file per question out.
//!
//! # Error Handling Strategy
//!
//! - **Fatal errors**: A missing, unreadable or oversized history file aborts the run before
//!   the output directory is touched. Failing to create the output root also aborts.
//! - **Per-entry errors**: An unsafe category, an uncreatable category directory or a failed
//!   write is logged as a warning, counted in [`SplitSummary::failed`], and the run continues.
//! - **Existing files**: Never compared or overwritten, only counted as skipped.

use std::fs;
use std::path::Path;

use crate::config::SplitterConfig;
use crate::error::{Result, SplitError};
use crate::models::{LogEntry, SplitSummary};
use crate::parsers::{parse_history, read_history_file};
use crate::splitter::output::{OutputFile, WriteOutcome};

/// Split the configured history file into per-category stub files
///
/// Entries are processed in document order. Running twice over the same input
/// and output creates nothing on the second run and reports every entry as skipped.
///
/// # Errors
///
/// Returns a fatal [`SplitError`] if the input cannot be read or the output
/// directory cannot be created. Per-entry failures are counted, not returned.
///
/// # Examples
///
/// ```no_run
/// use history_splitter::{SplitterConfig, split_history};
///
/// let summary = split_history(&SplitterConfig::default())?;
/// println!("created {} files", summary.created);
/// # Ok::<(), history_splitter::SplitError>(())
/// ```
pub fn split_history(config: &SplitterConfig) -> Result<SplitSummary> {
    let content = read_history_file(&config.input_file)?;
    let days = parse_history(&content);

    fs::create_dir_all(&config.output_dir).map_err(|source| SplitError::CreateOutputDir {
        path: config.output_dir.clone(),
        source,
    })?;
    let output_dir =
        fs::canonicalize(&config.output_dir).unwrap_or_else(|_| config.output_dir.clone());

    let mut summary = SplitSummary::new(output_dir);

    for day in &days {
        tracing::info!("processing day {} ({})", day.day_number, day.date);
        for entry in &day.entries {
            process_entry(&config.output_dir, entry, &mut summary);
        }
    }

    tracing::info!(
        total = summary.total,
        created = summary.created,
        skipped = summary.skipped,
        failed = summary.failed,
        "split finished"
    );

    Ok(summary)
}

fn process_entry(output_dir: &Path, entry: &LogEntry, summary: &mut SplitSummary) {
    summary.record_category(&entry.category);

    let outcome = OutputFile::for_entry(output_dir, entry).and_then(|out| {
        let outcome = out.write_if_absent(&entry.title)?;
        Ok((out, outcome))
    });

    match outcome {
        Ok((out, WriteOutcome::Created)) => {
            tracing::info!("[{}] created {}", entry.category, out.file_name);
            summary.record_created();
        }
        Ok((out, WriteOutcome::Skipped)) => {
            tracing::info!("[{}] already exists, skipping {}", entry.category, out.file_name);
            summary.record_skipped();
        }
        Err(e) => {
            tracing::warn!(
                "[{}] failed to create stub for issue {}: {}",
                entry.category,
                entry.issue,
                e
            );
            summary.record_failed();
        }
    }
}
