//! Error types for the split pipeline.
//!
//! Fatal variants abort a run before or while setting up the output tree.
//! Per-entry variants are logged by the splitter and counted as failed; they
//! never stop the remaining batch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input file too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    InputTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create category directory {}: {source}", .path.display())]
    CreateCategoryDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsafe category name: {0:?}")]
    UnsafeCategory(String),

    #[error("unsafe output file name: {0:?}")]
    UnsafeFileName(String),
}

impl SplitError {
    /// Whether this error ends the whole run rather than a single entry
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SplitError::MissingInput(_)
                | SplitError::ReadInput { .. }
                | SplitError::InputTooLarge { .. }
                | SplitError::CreateOutputDir { .. }
        )
    }
}

pub type Result<T, E = SplitError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message_names_path() {
        let err = SplitError::MissingInput(PathBuf::from("category/history.md"));
        assert_eq!(err.to_string(), "input file not found: category/history.md");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_per_entry_errors_are_not_fatal() {
        let err = SplitError::WriteFile {
            path: PathBuf::from("out/js/a.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("out/js/a.md"));
        assert!(!SplitError::UnsafeCategory("..".to_string()).is_fatal());
    }
}
