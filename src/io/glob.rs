//! Expanding glob patterns into the CSV files to load.
//!
//! # Examples
//!
//! ```no_run
//! use csvframe::io::glob::expand_glob;
//!
//! // Every monthly extract under reports/2022
//! let files = expand_glob("reports/2022/*/*.csv")?;
//! # Ok::<(), csvframe::FrameError>(())
//! ```

use crate::error::{FrameError, FrameResult};
use glob::glob;
use std::path::PathBuf;

/// Expand a glob pattern into a sorted vector of matching file paths.
///
/// Directories are skipped. No match is an empty vector, not an error.
///
/// # Pattern Syntax
///
/// - `*` matches any sequence of characters within a path component
/// - `?` matches any single character
/// - `**` matches zero or more directories
/// - `[abc]` / `[!abc]` match any character in / not in the set
///
/// # Errors
///
/// [`FrameError::Glob`] if the pattern is invalid or a matched entry cannot
/// be read.
pub fn expand_glob(pattern: &str) -> FrameResult<Vec<PathBuf>> {
    let paths = glob(pattern)
        .map_err(|e| FrameError::Glob(format!("invalid glob pattern {pattern:?}: {e}")))?;

    let mut result = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            FrameError::Glob(format!("error reading glob entry for {pattern:?}: {e}"))
        })?;
        if path.is_file() {
            result.push(path);
        }
    }

    result.sort();
    Ok(result)
}
