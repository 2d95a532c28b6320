use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::{Component, Path};

use crate::error::{Result, SplitError};

// Maximum size for the history file: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Longest title (in characters) kept in an output filename
pub const MAX_TITLE_CHARS: usize = 150;

// Characters that are illegal in filenames on at least one common platform
const ILLEGAL_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Makes an entry title usable as part of a filename
///
/// Removes `< > : " / \ | ? *`, collapses whitespace runs to a single space,
/// keeps at most [`MAX_TITLE_CHARS`] characters and then trims both ends.
///
/// # Examples
///
/// ```
/// use history_splitter::sanitize_title;
///
/// assert_eq!(sanitize_title(r#"A/B: "C""#), "AB C");
/// assert_eq!(sanitize_title("  what   is\ta closure?  "), "what is a closure");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let mut collapsed = String::with_capacity(title.len());
    let mut prev_space = false;

    for c in title.chars() {
        if ILLEGAL_FILENAME_CHARS.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            if !prev_space {
                collapsed.push(' ');
            }
            prev_space = true;
        } else {
            collapsed.push(c);
            prev_space = false;
        }
    }

    // Truncate by characters, not bytes, so CJK titles stay valid UTF-8
    let truncated: String = match collapsed.char_indices().nth(MAX_TITLE_CHARS) {
        Some((byte_idx, _)) => collapsed[..byte_idx].to_string(),
        None => collapsed,
    };

    truncated.trim().to_string()
}

/// Whether `name` is exactly one normal path component
///
/// Rejects empty or whitespace-only names, path separators, NUL, `.` and `..`.
pub fn is_single_component(name: &str) -> bool {
    if name.trim().is_empty() || name.contains(&['/', '\\', '\0'][..]) {
        return false;
    }

    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

/// Checks that a category names exactly one directory under the output root
///
/// # Errors
///
/// Returns [`SplitError::UnsafeCategory`] unless [`is_single_component`] holds.
pub fn validate_category(category: &str) -> Result<()> {
    if is_single_component(category) {
        Ok(())
    } else {
        Err(SplitError::UnsafeCategory(category.to_string()))
    }
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size check and the read see the same file.
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read or the file is larger than 10MB.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .map_err(|source| SplitError::ReadInput { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(SplitError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use history_splitter::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/notes/split_questions_by_category");
/// // Returns "~/notes/split_questions_by_category" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
