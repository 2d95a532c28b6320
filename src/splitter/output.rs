use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};
use crate::models::LogEntry;
use crate::utils::{is_single_component, sanitize_title, validate_category};

/// Result of trying to create one stub file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// A file already existed at the target path and was left untouched
    Skipped,
}

/// Target location of one entry's stub file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub category_dir: PathBuf,
    pub file_name: String,
}

impl OutputFile {
    /// Compute `<output_dir>/<category>/<date>_<issue>.<sanitized title>.md`
    ///
    /// # Errors
    ///
    /// - [`SplitError::UnsafeCategory`] if the category would escape the output directory
    /// - [`SplitError::UnsafeFileName`] if the date turns the file name into a nested path
    pub fn for_entry(output_dir: &Path, entry: &LogEntry) -> Result<Self> {
        validate_category(&entry.category)?;

        let file_name =
            format!("{}_{}.{}.md", entry.date, entry.issue, sanitize_title(&entry.title));
        if !is_single_component(&file_name) {
            return Err(SplitError::UnsafeFileName(file_name));
        }

        Ok(Self { category_dir: output_dir.join(&entry.category), file_name })
    }

    pub fn path(&self) -> PathBuf {
        self.category_dir.join(&self.file_name)
    }

    /// Create the category directory if needed and write the stub unless a file exists
    ///
    /// Uses `create_new`, so the existence check and the creation are one operation.
    pub fn write_if_absent(&self, title: &str) -> Result<WriteOutcome> {
        fs::create_dir_all(&self.category_dir).map_err(|source| {
            SplitError::CreateCategoryDir { path: self.category_dir.clone(), source }
        })?;

        let path = self.path();
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(WriteOutcome::Skipped),
            Err(source) => return Err(SplitError::WriteFile { path, source }),
        };

        fill_new_file(file, path, title)?;
        Ok(WriteOutcome::Created)
    }
}

/// Write the stub into a file just created at `path`, removing it again on failure
///
/// A truncated stub left behind would count as skipped on every later run.
fn fill_new_file<W: Write>(mut writer: W, path: PathBuf, title: &str) -> Result<()> {
    let written = writer.write_all(render_stub(title).as_bytes()).and_then(|()| writer.flush());
    if let Err(source) = written {
        drop(writer);
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!("failed to remove partial file {}: {}", path.display(), e);
        }
        return Err(SplitError::WriteFile { path, source });
    }
    Ok(())
}

/// Stub body: a heading with the original title plus the start/end markers
pub fn render_stub(title: &str) -> String {
    format!("# Problem: {title}\n\n*[interview]: start\n\n*[interview]: end\n")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::IssueNumber;

    fn entry(category: &str, title: &str, issue: &str) -> LogEntry {
        LogEntry {
            category: category.to_string(),
            title: title.to_string(),
            url: format!("https://github.com/haizlin/fe-interview/issues/{issue}"),
            day_number: "1".to_string(),
            date: "2019-04-17".to_string(),
            issue: IssueNumber::from(issue),
        }
    }

    #[test]
    fn test_output_path_layout() {
        let out = OutputFile::for_entry(Path::new("out"), &entry("js", "What is a closure?", "3"))
            .unwrap();
        assert_eq!(out.path(), PathBuf::from("out/js/2019-04-17_3.What is a closure.md"));
    }

    #[test]
    fn test_output_path_uses_sanitized_title() {
        let out = OutputFile::for_entry(Path::new("out"), &entry("css", r#"A/B: "C""#, "9")).unwrap();
        assert_eq!(out.file_name, "2019-04-17_9.AB C.md");
    }

    #[test]
    fn test_output_path_keeps_issue_digits_verbatim() {
        let out = OutputFile::for_entry(Path::new("out"), &entry("js", "a", "007")).unwrap();
        assert_eq!(out.file_name, "2019-04-17_007.a.md");
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        struct FullDisk;
        impl Write for FullDisk {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("2019-04-17_1.closure.md");
        fs::write(&path, "").unwrap();

        let err = fill_new_file(FullDisk, path.clone(), "closure").unwrap_err();
        assert!(matches!(err, SplitError::WriteFile { .. }));
        assert!(!path.exists(), "partial stub must not survive a failed write");
    }

    #[test]
    fn test_output_rejects_unsafe_category() {
        let err = OutputFile::for_entry(Path::new("out"), &entry("..", "escape", "1")).unwrap_err();
        assert!(matches!(err, SplitError::UnsafeCategory(_)));
    }

    #[test]
    fn test_output_rejects_date_with_separators() {
        let mut e = entry("js", "closure", "1");
        e.date = "../../2019".to_string();
        let err = OutputFile::for_entry(Path::new("out"), &e).unwrap_err();
        assert!(matches!(err, SplitError::UnsafeFileName(_)));
    }

    #[test]
    fn test_render_stub_keeps_original_title() {
        assert_eq!(
            render_stub(r#"A/B: "C""#),
            "# Problem: A/B: \"C\"\n\n*[interview]: start\n\n*[interview]: end\n"
        );
    }

    #[test]
    fn test_write_if_absent_creates_then_skips() {
        let dir = TempDir::new().unwrap();
        let e = entry("vue", "nextTick", "7");
        let out = OutputFile::for_entry(dir.path(), &e).unwrap();

        assert_eq!(out.write_if_absent(&e.title).unwrap(), WriteOutcome::Created);
        assert!(out.category_dir.is_dir());
        assert_eq!(fs::read_to_string(out.path()).unwrap(), render_stub("nextTick"));

        assert_eq!(out.write_if_absent(&e.title).unwrap(), WriteOutcome::Skipped);
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let e = entry("vue", "nextTick", "7");
        let out = OutputFile::for_entry(dir.path(), &e).unwrap();
        fs::create_dir_all(&out.category_dir).unwrap();
        fs::write(out.path(), "my answer").unwrap();

        assert_eq!(out.write_if_absent(&e.title).unwrap(), WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(out.path()).unwrap(), "my answer");
    }

    #[test]
    fn test_category_dir_blocked_by_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("js"), "not a directory").unwrap();
        let e = entry("js", "closure", "1");
        let out = OutputFile::for_entry(dir.path(), &e).unwrap();

        let err = out.write_if_absent(&e.title).unwrap_err();
        assert!(matches!(err, SplitError::CreateCategoryDir { .. }));
    }
}
