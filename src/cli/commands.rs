use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use crate::config::SplitterConfig;
use crate::error::SplitError;
use crate::logging::init_logging;
use crate::models::{DayBlock, LogEntry, SplitSummary};
use crate::parsers::parse_history_file;
use crate::splitter::{OutputFile, split_history};
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "history-splitter")]
#[command(version = "0.1.0")]
#[command(
    about = "Split a markdown question history into one stub file per question",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// History file to read [default: category/history.md]
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Root directory for the per-category files [default: split_questions_by_category]
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// TOML config file providing input_file and output_dir
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split the history file into per-category stub files (default)
    Split,
    /// List parsed entries and their target paths without writing anything
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SplitterConfig::load(cli.config.as_deref())?
        .with_overrides(cli.input.clone(), cli.output.clone());

    match cli.command.as_ref().unwrap_or(&Commands::Split) {
        Commands::Split => split(&config, cli.json),
        Commands::List => list(&config, cli.json),
    }
}

fn split(config: &SplitterConfig, json: bool) -> Result<()> {
    tracing::info!(
        "splitting {} into {}",
        config.input_file.display(),
        config.output_dir.display()
    );

    let summary = match split_history(config) {
        Ok(summary) => summary,
        Err(SplitError::MissingInput(path)) => {
            report_missing_input(&path);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &SplitSummary) {
    println!("Split complete!");
    println!("Total entries: {}", summary.total);
    println!("  Created: {}", summary.created);
    println!("  Skipped (already exist): {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
    println!("Output directory: {}", format_path_with_tilde(&summary.output_dir));

    if !summary.by_category.is_empty() {
        println!();
        println!("Entries per category:");
        for (category, count) in &summary.by_category {
            println!("  {}: {}", category, count);
        }
    }
}

#[derive(Serialize)]
struct ListedEntry<'a> {
    #[serde(flatten)]
    entry: &'a LogEntry,
    output_path: Option<PathBuf>,
}

fn list(config: &SplitterConfig, json: bool) -> Result<()> {
    let days = match parse_history_file(&config.input_file) {
        Ok(days) => days,
        Err(SplitError::MissingInput(path)) => {
            report_missing_input(&path);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        let listed: Vec<ListedEntry> = days
            .iter()
            .flat_map(|day| &day.entries)
            .map(|entry| ListedEntry { entry, output_path: target_path(config, entry).ok() })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
    } else {
        print_days(config, &days);
    }

    Ok(())
}

fn print_days(config: &SplitterConfig, days: &[DayBlock]) {
    let mut total = 0;
    for day in days {
        println!("Day {} ({})", day.day_number, day.date);
        for entry in &day.entries {
            let target = match target_path(config, entry) {
                Ok(path) => path.display().to_string(),
                Err(e) => format!("(not written: {e})"),
            };
            println!("  [{}] #{} {} -> {}", entry.category, entry.issue, entry.title, target);
        }
        total += day.entries.len();
    }
    println!();
    println!("{} entries in {} days", total, days.len());
}

fn target_path(config: &SplitterConfig, entry: &LogEntry) -> Result<PathBuf, SplitError> {
    OutputFile::for_entry(&config.output_dir, entry).map(|out| out.path())
}

fn report_missing_input(path: &Path) {
    eprintln!("Error: input file not found: {}", path.display());
}
