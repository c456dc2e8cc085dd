//! The merge command: discover the exports, fold every row, write the
//! summary.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::aggregate::Aggregate;
use crate::{config, discovery, report};

/// Command structure for a merge run.
#[derive(Debug, Clone, Default)]
pub struct MergeCommand {
    /// Directory to operate on instead of the current working directory.
    /// The CLI never sets this; tests inject a temp directory here to
    /// avoid CWD races in parallel tests.
    pub path: Option<PathBuf>,
}

/// What a completed run did, for the CLI layer to print.
#[derive(Debug, Clone)]
pub struct MergeSummary {
    pub files: usize,
    pub rows: usize,
    pub distinct: usize,
    pub output: PathBuf,
}

/// Execute the merge command.
///
/// The aggregate is owned here and handed by reference through the stages:
/// discovery produces the file list, every file is folded in sequentially,
/// and the report stage consumes the final map exactly once. Any error
/// aborts the run before the summary file is touched.
pub fn run(cmd: MergeCommand) -> Result<MergeSummary> {
    let dir = match cmd.path {
        Some(path) => path,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let files = discovery::discover_input_files(&dir)?;
    info!("found {} input file(s) in {}", files.len(), dir.display());

    let mut aggregate = Aggregate::new();
    let mut rows = 0;
    for file in &files {
        let read = aggregate.ingest_file(file)?;
        debug!(
            "{}: {} row(s), {} distinct listing(s) so far",
            file.display(),
            read,
            aggregate.len()
        );
        rows += read;
    }

    let output = dir.join(config::OUTPUT_FILE);
    report::write_summary(&aggregate, &output)?;
    info!("wrote {} listing(s) to {}", aggregate.len(), output.display());

    Ok(MergeSummary {
        files: files.len(),
        rows,
        distinct: aggregate.len(),
        output,
    })
}
