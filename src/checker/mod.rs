// src/checker/mod.rs
// =============================================================================
// This module contains the redirect checking logic.
//
// Submodules:
// - classify: compares one response with one Rule (pure, no I/O)
// - http: makes the non-following GET request and feeds classify()
//
// Rust concepts:
// - pub use: Re-export items so callers write `checker::Outcome`
// =============================================================================

mod classify;
mod http;

pub use classify::{Mismatch, Outcome};
pub use http::RedirectChecker;
