// src/report/mod.rs
// =============================================================================
// What happens with the pool's results.
//
// Submodules:
// - csv: writes (and reads back) the header-less mismatch report
// - summary: terminal narration, JSON output and the final decision of
//   whether a report file gets written
// =============================================================================

mod csv;
mod summary;

pub use self::csv::write_mismatches;
#[cfg(test)]
pub use self::csv::read_mismatches;
pub use summary::{announce_start, finish, ExitStatus};
