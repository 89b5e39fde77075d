// src/pool/queue.rs
// =============================================================================
// The bounded worker pool.
//
// How it works:
// 1. The raw CSV records become a stream, in file order
// 2. Each record is normalized into a Rule and handed to the check function
// 3. buffer_unordered(concurrency) keeps at most `concurrency` checks running
//    and only pulls the next record when a slot frees up
// 4. This coordinator is the only place outcomes land: it owns the Mismatch
//    list, so no Mutex is needed
// 5. The first Fatal outcome stops everything: we stop polling and drop the
//    stream. Records not yet pulled are never dispatched, and checks still in
//    flight are dropped with it (their results can't reach us anyway)
//
// Rust concepts:
// - Streams: an async iterator; StreamExt adds map() and buffer_unordered()
// - Generics with trait bounds: the pool works with any async check
//   function, which is how the tests substitute a fake one
// =============================================================================

use std::future::Future;

use futures::future::{self, Either};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::checker::{Mismatch, Outcome};
use crate::error::CheckError;
use crate::rules::{normalize, Rule};

/// How a run ended.
#[derive(Debug)]
pub enum PoolState {
    /// Every record was checked
    Done,
    /// A fatal error stopped the run; carries that one error
    Aborted(CheckError),
}

/// Everything the pool hands to the report sink.
#[derive(Debug)]
pub struct PoolReport {
    pub state: PoolState,
    /// Completion order, not input order
    pub mismatches: Vec<Mismatch>,
    /// Number of records whose check was started
    pub dispatched: usize,
}

impl PoolReport {
    pub fn is_aborted(&self) -> bool {
        matches!(self.state, PoolState::Aborted(_))
    }
}

/// Runs `check` over every record, with at most `concurrency` at once.
///
/// A record with fewer than two fields is fatal, like a transport error.
pub async fn run_pool<F, Fut>(records: Vec<Vec<String>>, concurrency: usize, check: F) -> PoolReport
where
    F: Fn(Rule) -> Fut,
    Fut: Future<Output = Outcome>,
{
    let concurrency = concurrency.max(1);
    let total = records.len();
    info!(rows = total, concurrency, "Worker pool running");

    let mut dispatched = 0usize;
    let mut mismatches = Vec::new();

    let state = {
        let mut outcomes = stream::iter(records.into_iter().enumerate())
            .map(|(index, fields)| {
                dispatched += 1;
                // Row numbers are 1-based, like a spreadsheet.
                // The check is started here, so pulling a row and starting
                // its check are the same event.
                match normalize(index + 1, &fields) {
                    Ok(rule) => Either::Left(check(rule)),
                    Err(e) => Either::Right(future::ready(Outcome::fatal(e))),
                }
            })
            .buffer_unordered(concurrency);

        let mut state = PoolState::Done;
        while let Some(outcome) = outcomes.next().await {
            match outcome {
                Outcome::Clean => {}
                Outcome::Mismatch(mismatch) => {
                    debug!(old = %mismatch.old, status = mismatch.status_code, "Mismatch recorded");
                    mismatches.push(mismatch);
                }
                Outcome::Fatal { error, mismatch } => {
                    if let Some(mismatch) = mismatch {
                        mismatches.push(mismatch);
                    }
                    warn!(error = %error, "Fatal error, aborting run");
                    state = PoolState::Aborted(error);
                    break;
                }
            }
        }
        state
    };

    match &state {
        PoolState::Done => info!(rows = total, mismatches = mismatches.len(), "Worker pool done"),
        PoolState::Aborted(_) => info!(
            dispatched,
            skipped = total - dispatched,
            mismatches = mismatches.len(),
            "Worker pool aborted"
        ),
    }

    PoolReport {
        state,
        mismatches,
        dispatched,
    }
}
