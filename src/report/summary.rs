// src/report/summary.rs
// =============================================================================
// Turns a finished pool run into terminal output, an optional report file and
// an exit status.
//
// - No mismatches: "all good" (unless quiet), no file written, quiet or not
// - Mismatches: the CSV report is written, quiet or not
// - A fatal error is printed once, to stderr, even in quiet mode. Mismatches
//   recorded before the abort are still written.
// =============================================================================

use anyhow::{Context, Result};
use tracing::info;

use super::write_mismatches;
use crate::config::RunConfig;
use crate::pool::{PoolReport, PoolState};

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every rule matched
    Clean = 0,
    /// At least one mismatch was written to the report
    Mismatches = 1,
    /// The run was aborted or couldn't start
    Failed = 2,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

pub fn announce_start(config: &RunConfig) {
    if !config.quiet {
        println!(
            "🌐 Making HTTP(S) requests with concurrency {}",
            config.concurrency
        );
    }
}

/// Reports the outcome of the pool and persists mismatches.
pub fn finish(report: PoolReport, config: &RunConfig) -> Result<ExitStatus> {
    let aborted = report.is_aborted();
    let PoolReport {
        state,
        mismatches,
        dispatched,
    } = report;
    info!(dispatched, mismatches = mismatches.len(), aborted, "Run finished");

    if config.json {
        println!("{}", serde_json::to_string_pretty(&mismatches)?);
    }

    if let PoolState::Aborted(error) = &state {
        eprintln!("❌ Error: {}", error);
    }

    if mismatches.is_empty() {
        if aborted {
            return Ok(ExitStatus::Failed);
        }
        if !config.quiet {
            println!("✅ All links look good.");
            println!("✅ No errors so nothing written to the csv file");
        }
        return Ok(ExitStatus::Clean);
    }

    write_mismatches(&config.output_path, &mismatches).with_context(|| {
        format!(
            "Failed to write results to {}",
            config.output_path.display()
        )
    })?;
    info!(path = %config.output_path.display(), rows = mismatches.len(), "Report written");

    if !config.quiet {
        println!(
            "❌ See errors in the csv file: {}",
            config.output_path.display()
        );
    }

    if aborted {
        Ok(ExitStatus::Failed)
    } else {
        Ok(ExitStatus::Mismatches)
    }
}
