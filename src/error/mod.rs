use std::path::PathBuf;
use thiserror::Error;

/// The unified error type for the whole merge pipeline.
///
/// Every variant is fatal: the run aborts on the first error, nothing is
/// retried or skipped, and no partial summary is written.
#[derive(Error, Debug)]
pub enum TallyError {
    /// The working directory could not be enumerated for input files.
    #[error("failed to list input files: {source}")]
    Discovery {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An input file could not be opened or a row could not be decoded.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: csv::Error },

    /// A key's first row was too narrow to seed an entry. Repeat rows for
    /// an already-seen key are exempt from the width requirement.
    #[error(
        "{}:{line}: first occurrence of {key:?} has {found} field(s), expected at least {min}",
        .path.display()
    )]
    ShortRow {
        path: PathBuf,
        line: u64,
        key: String,
        found: usize,
        min: usize,
    },

    /// The summary file could not be created or written.
    #[error("failed to write summary to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
