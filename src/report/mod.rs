//! Serialization of the aggregate into the summary file.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::aggregate::Aggregate;
use crate::error::TallyError;

/// One row of the summary file.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    name: &'a str,
    address: &'a str,
    business: &'a str,
    phone: &'a str,
    count: i64,
}

/// Write one row per distinct listing to `path`, in first-seen order.
///
/// The file is created or truncated. Like the inputs, the summary carries
/// no header row; the count is rendered as a plain decimal integer.
pub fn write_summary(aggregate: &Aggregate, path: &Path) -> Result<(), TallyError> {
    let write_err = |source: Box<dyn std::error::Error + Send + Sync>| TallyError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| write_err(e.into()))?;

    for entry in aggregate.iter() {
        writer
            .serialize(SummaryRow {
                name: &entry.name,
                address: &entry.address,
                business: &entry.business,
                phone: &entry.phone,
                count: entry.count,
            })
            .map_err(|e| write_err(e.into()))?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;

    debug!("{}: {} row(s) written", path.display(), aggregate.len());
    Ok(())
}
