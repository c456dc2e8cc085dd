//! The deduplicating fold at the heart of the merge.
//!
//! Rows from every export are folded into an [`Aggregate`], a map from the
//! listing name in the first column to one representative entry. The first
//! row seen for a name wins: its leading four fields are kept verbatim and
//! its fifth field seeds the occurrence count. Every later row with the
//! same name adds exactly one to the count and contributes nothing else;
//! in particular its own fifth field is ignored.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;
use tracing::trace;

use crate::config::{COUNT_FIELD, KEY_FIELD, MIN_FIELDS};
use crate::error::TallyError;

/// Accumulated state for one distinct listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateEntry {
    pub name: String,
    pub address: String,
    pub business: String,
    pub phone: String,
    /// Seeded from the first row's count column, then incremented by one
    /// for every repeat row.
    pub count: i64,
}

/// Map from listing name to its accumulated entry.
///
/// Iteration order is insertion order (first-seen order); together with the
/// sorted file list from discovery this makes the summary deterministic.
#[derive(Debug, Default)]
pub struct Aggregate {
    entries: HashMap<String, AggregateEntry>,
    order: Vec<String>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `path` as a headerless CSV file and fold every row in.
    ///
    /// Returns the number of rows read. Rows may be wider than the five
    /// tracked columns, and narrower for keys that are already present.
    pub fn ingest_file(&mut self, path: &Path) -> Result<usize, TallyError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| TallyError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut rows = 0;
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|source| TallyError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let line = record.position().map_or(index as u64 + 1, |p| p.line());
            self.fold(&record, path, line)?;
            rows += 1;
        }

        Ok(rows)
    }

    /// Fold one row into the map.
    fn fold(&mut self, record: &StringRecord, path: &Path, line: u64) -> Result<(), TallyError> {
        let key = record.get(KEY_FIELD).unwrap_or_default();

        if let Some(entry) = self.entries.get_mut(key) {
            // Repeat rows count as one occurrence each; their own count
            // column is never read.
            entry.count += 1;
            trace!(
                "{}:{}: repeat of {:?}, count now {}",
                path.display(),
                line,
                key,
                entry.count
            );
            return Ok(());
        }

        if record.len() < MIN_FIELDS {
            return Err(TallyError::ShortRow {
                path: path.to_path_buf(),
                line,
                key: key.to_string(),
                found: record.len(),
                min: MIN_FIELDS,
            });
        }

        let entry = AggregateEntry {
            name: record[KEY_FIELD].to_string(),
            address: record[1].to_string(),
            business: record[2].to_string(),
            phone: record[3].to_string(),
            count: record[COUNT_FIELD].trim().parse().unwrap_or(0),
        };
        trace!(
            "{}:{}: new listing {:?}, seed count {}",
            path.display(),
            line,
            key,
            entry.count
        );
        self.order.push(key.to_string());
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }

    /// Look up the entry for a listing name.
    pub fn get(&self, key: &str) -> Option<&AggregateEntry> {
        self.entries.get(key)
    }

    /// Number of distinct listings seen so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &AggregateEntry> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }
}
