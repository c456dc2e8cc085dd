//! Fixed layout of the listing exports.
//!
//! The exports this tool consumes always carry the same five leading
//! columns, so the key column, the count column, and the output file name
//! are compile-time constants rather than configuration.

/// Glob pattern the input files are matched against, relative to the
/// working directory. Matching is non-recursive.
pub const INPUT_PATTERN: &str = "*.csv";

/// Name of the summary file written into the working directory. The name
/// matches [`INPUT_PATTERN`], so discovery filters it out explicitly to
/// keep repeated runs from re-ingesting their own output.
pub const OUTPUT_FILE: &str = "tally.csv";

/// Index of the column a row is deduplicated under (the listing name).
pub const KEY_FIELD: usize = 0;

/// Index of the column that seeds a listing's count on first sight.
pub const COUNT_FIELD: usize = 4;

/// Minimum row width required when a key is seen for the first time.
/// Repeat rows never touch the count column and may be narrower.
pub const MIN_FIELDS: usize = 5;
