// src/error.rs
// =============================================================================
// Error types for the redirect checker.
//
// Only one thing here is NOT an error: a mismatch between the expected and
// the actual redirect. Those are normal outcomes and live in checker::Mismatch.
//
// `Config` happens before any request is made. Every other variant aborts
// a run that has started.
// =============================================================================

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Error, Debug)]
pub enum CheckError {
    /// Bad base URL, missing input file, unparseable CSV.
    #[error("{0}")]
    Config(String),

    /// A CSV row without both an old and a new path.
    #[error("Row {row} has {fields} field(s); old path and new path are required")]
    MalformedRow { row: usize, fields: usize },

    /// DNS, connection, TLS or timeout failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status in the error class.
    #[error("Server returned a {status} status code.")]
    ServerErrorClass { status: u16 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
