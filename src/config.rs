// src/config.rs
// =============================================================================
// The run configuration: built once from the CLI, then shared read-only by
// every worker (behind an Arc, so no locking is needed).
// =============================================================================

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{CheckError, Result};
use crate::rules::is_absolute;

/// Basic-auth credentials from `-a username:password`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub pass: Option<String>,
}

impl Credentials {
    /// Splits on the first colon. Everything after it, colons included, is
    /// the password. No colon at all means a username without a password.
    pub fn parse(value: &str) -> Self {
        match value.split_once(':') {
            Some((user, pass)) => Credentials {
                user: user.to_string(),
                pass: Some(pass.to_string()),
            },
            None => Credentials {
                user: value.to_string(),
                pass: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Absolute base URL, trimmed
    pub site_url: String,
    /// Maximum number of requests in flight
    pub concurrency: usize,
    pub credentials: Option<Credentials>,
    pub quiet: bool,
    /// Absolute path of the mismatch report
    pub output_path: PathBuf,
    pub json: bool,
}

impl RunConfig {
    /// Validates the CLI input. Returns the config and the input CSV path.
    pub fn from_cli(cli: &Cli) -> Result<(Self, PathBuf)> {
        let site_url = cli.url.trim().to_string();
        if !is_absolute(&site_url) {
            return Err(CheckError::config(
                "URL must be an absolute path. eg. https://www.example.com",
            ));
        }

        let input = absolute_path(Path::new(cli.file.trim()))?;
        if !input.exists() {
            return Err(CheckError::config("File or directory doesn't exist."));
        }

        let config = RunConfig {
            site_url,
            concurrency: usize::from(cli.number),
            credentials: cli.auth.as_deref().map(Credentials::parse),
            quiet: cli.quiet,
            output_path: absolute_path(Path::new(cli.csv.trim()))?,
            json: cli.json,
        };

        Ok((config, input))
    }
}

/// Resolves `path` against the current directory when it is relative.
fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
