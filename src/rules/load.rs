// src/rules/load.rs
// =============================================================================
// Reads the rules file into raw records.
//
// The reader is "flexible": rows may have more or fewer columns than the
// first row. Column count is only checked later, per row, by normalize().
// There is no header row.
// =============================================================================

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{CheckError, Result};

/// Reads every record of the CSV file at `path`.
///
/// Any parse failure is a Config error: nothing has been requested yet.
pub fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_config_error)?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_config_error)?;
        records.push(record.iter().map(str::to_string).collect());
    }

    debug!(path = %path.display(), rows = records.len(), "Loaded redirect rules");
    Ok(records)
}

fn csv_config_error(err: csv::Error) -> CheckError {
    CheckError::config(format!(
        "It looks like your file is either not a csv or has some bad formatting. ({})",
        err
    ))
}
