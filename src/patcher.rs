use crate::error::{ChangelogError, Result};
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;

/// Default delimiter line after which the changelog is inserted.
pub const DEFAULT_DELIMITER: &str = "---";

/// Compiles `pattern` anchored at the start of a line, case-insensitive, multi-line.
pub fn delimiter_regex(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^{pattern}"))
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|source| ChangelogError::InvalidDelimiter {
            pattern: pattern.to_string(),
            source,
        })
}

/// Inserts `insertion` after the first match of `delimiter`, separated by a space.
///
/// Returns `None` when the delimiter does not occur in `content`. Later matches are left alone.
pub fn insert_after_delimiter(content: &str, delimiter: &Regex, insertion: &str) -> Option<String> {
    delimiter.find(content).map(|found| {
        format!(
            "{}{} {}{}",
            &content[..found.start()],
            found.as_str(),
            insertion,
            &content[found.end()..]
        )
    })
}

/// Reads `path`, inserts `changelog` after the delimiter and writes the file back.
///
/// Returns whether the file was changed. A missing delimiter leaves the file untouched.
pub fn patch_file(path: &Path, delimiter: &Regex, changelog: &str) -> Result<bool> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| ChangelogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match insert_after_delimiter(&content, delimiter, changelog) {
        Some(patched) => {
            fs::write(path, patched).map_err(|source| ChangelogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(true)
        }
        None => {
            tracing::debug!(path = %path.display(), delimiter = %delimiter, "delimiter not found");
            Ok(false)
        }
    }
}
