//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use history_splitter::SplitterConfig;
use tempfile::TempDir;

pub const ISSUE_BASE_URL: &str = "https://github.com/haizlin/fe-interview/issues";

/// Builder for one `- 第N天 (date)` block
pub struct DayBuilder {
    day_number: u32,
    date: String,
    lines: Vec<String>,
}

impl DayBuilder {
    pub fn new(day_number: u32, date: &str) -> Self {
        Self { day_number, date: date.to_string(), lines: Vec::new() }
    }

    /// Add an entry whose URL points at the given issue
    pub fn entry(mut self, category: &str, title: &str, issue: u64) -> Self {
        self.lines.push(format!("  - [{}] [{}]({}/{})", category, title, ISSUE_BASE_URL, issue));
        self
    }

    /// Add an entry with an arbitrary URL
    pub fn entry_with_url(mut self, category: &str, title: &str, url: &str) -> Self {
        self.lines.push(format!("  - [{}] [{}]({})", category, title, url));
        self
    }

    pub fn to_markdown(&self) -> String {
        let mut out = format!("- 第{}天 ({})\n", self.day_number, self.date);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Build history markdown from day blocks
pub fn history_markdown(days: &[DayBuilder]) -> String {
    let mut out = String::from("# 面试题历史\n\n");
    for day in days {
        out.push_str(&day.to_markdown());
    }
    out
}

/// Temporary workspace holding a history file and an output directory
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn input_file(&self) -> PathBuf {
        self.temp_dir.path().join("category").join("history.md")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("split_questions_by_category")
    }

    /// Write the history file with raw content
    pub fn with_history(self, content: &str) -> Self {
        let input = self.input_file();
        fs::create_dir_all(input.parent().expect("history file has a parent"))
            .expect("Failed to create category dir");
        fs::write(&input, content).expect("Failed to write history.md");
        self
    }

    /// Write the history file from day builders
    pub fn with_days(self, days: &[DayBuilder]) -> Self {
        let content = history_markdown(days);
        self.with_history(&content)
    }

    pub fn config(&self) -> SplitterConfig {
        SplitterConfig { input_file: self.input_file(), output_dir: self.output_dir() }
    }

    /// Sorted file names inside one category directory
    pub fn files_in(&self, category: &str) -> Vec<String> {
        let dir = self.output_dir().join(category);
        let mut names: Vec<String> = match fs::read_dir(&dir) {
            Ok(entries) => entries
                .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    /// Total number of files below the output directory
    pub fn count_output_files(&self) -> usize {
        count_files(&self.output_dir())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

fn count_files(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .map(|e| e.expect("dir entry").path())
        .map(|p| if p.is_dir() { count_files(&p) } else { 1 })
        .sum()
}

/// A realistic two-day history spanning three categories
pub fn realistic_workspace() -> Workspace {
    Workspace::new().with_days(&[
        DayBuilder::new(1, "2019-04-17")
            .entry("html", "页面导入样式时，使用link和@import有什么区别？", 1)
            .entry("css", "圣杯布局和双飞翼布局的理解和区别，并用代码实现", 2)
            .entry("js", "用递归算法实现，数组长度为5且元素的随机数在2-32间不重复的值", 3),
        DayBuilder::new(2, "2019-04-18")
            .entry("html", "html的元素有哪些（包含H5）？", 6)
            .entry("css", "CSS3有哪些新增的特性？", 7)
            .entry("js", "写一个方法去掉字符串中的空格", 8),
    ])
}
