// src/pool/mod.rs
// =============================================================================
// The bounded worker pool that drives the redirect checks.
//
// See queue.rs for how dispatch, the concurrency cap and fail-fast work.
// =============================================================================

mod queue;

pub use queue::{run_pool, PoolReport, PoolState};
