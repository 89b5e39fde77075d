// src/report/csv.rs
// The mismatch report: one header-less CSV row per Mismatch,
// columns old,new,status_code,reason.

use std::path::Path;

use csv::WriterBuilder;

use crate::checker::Mismatch;
use crate::error::Result;

/// Writes `mismatches` to `path`, replacing any existing file.
pub fn write_mismatches(path: &Path, mismatches: &[Mismatch]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    for mismatch in mismatches {
        writer.serialize(mismatch)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a report written by `write_mismatches`.
#[cfg(test)]
pub fn read_mismatches(path: &Path) -> Result<Vec<Mismatch>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path)?;
    let mut mismatches = Vec::new();
    for row in reader.deserialize() {
        mismatches.push(row?);
    }
    Ok(mismatches)
}
