// src/rules/mod.rs
// =============================================================================
// Everything about the input rules: reading the CSV, turning rows into
// Rules, and resolving paths against the base site URL.
//
// Submodules:
// - load: reads the CSV file into raw records
// - row: trims fields and builds a Rule (default status 301)
// - url: absolute/relative classification and resolution
// =============================================================================

mod load;
mod row;
mod url;

pub use load::read_records;
pub use row::{normalize, Rule};
pub use url::{is_absolute, resolve};
