//! Enumeration of the CSV exports to merge.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::debug;

use crate::config::{INPUT_PATTERN, OUTPUT_FILE};
use crate::error::TallyError;

/// List the CSV files in `dir`, in lexicographic order.
///
/// Matching is non-recursive, and the summary file itself is excluded so a
/// later run never re-ingests what an earlier one wrote. An empty result is
/// not an error.
pub fn discover_input_files(dir: &Path) -> Result<Vec<PathBuf>, TallyError> {
    let pattern = dir.join(INPUT_PATTERN).to_string_lossy().into_owned();

    let mut files = Vec::new();
    for entry in glob(&pattern).map_err(|e| TallyError::Discovery { source: e.into() })? {
        let path = entry.map_err(|e| TallyError::Discovery { source: e.into() })?;
        if path.file_name().is_some_and(|name| name == OUTPUT_FILE) {
            debug!("skipping {}: own output file", path.display());
            continue;
        }
        // A directory can match the pattern too; only regular files count.
        if fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests;
