// src/rules/row.rs
// =============================================================================
// Turns one raw CSV record into a Rule.
//
// - Every field is trimmed
// - Field 3 (expected status) is optional and defaults to 301 when missing
//   or blank. Anything else that isn't a status code never matches.
// - Fewer than two fields is a MalformedRow error
// =============================================================================

use crate::error::{CheckError, Result};

/// Status expected when a row leaves the third column out.
pub const DEFAULT_STATUS: u16 = 301;

/// One redirect expectation from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// 1-based position in the input file, used in error messages
    pub row: usize,
    pub old_path: String,
    pub new_path: String,
    /// None when the status column holds something that isn't a status
    /// code (`3O1`, `abc`, `70000`). Such a rule never matches a response.
    pub expected_status: Option<u16>,
}

/// Builds a Rule from the raw fields of row number `row`.
///
/// A missing or blank third field falls back to 301. A non-blank one that
/// doesn't parse as a status code gives `expected_status: None`.
pub fn normalize(row: usize, fields: &[String]) -> Result<Rule> {
    let fields: Vec<&str> = fields.iter().map(|f| f.trim()).collect();

    if fields.len() < 2 {
        return Err(CheckError::MalformedRow {
            row,
            fields: fields.len(),
        });
    }

    let expected_status = match fields.get(2) {
        Some(status) if !status.is_empty() => status.parse::<u16>().ok(),
        _ => Some(DEFAULT_STATUS),
    };

    Ok(Rule {
        row,
        old_path: fields[0].to_string(),
        new_path: fields[1].to_string(),
        expected_status,
    })
}
