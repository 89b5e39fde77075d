// src/checker/http.rs
// =============================================================================
// This module makes the actual HTTP requests.
//
// Key functionality:
// - One GET per rule, with redirect following turned OFF (we want to see the
//   3xx response itself, not where it ends up)
// - A fixed "Redirect Tester v<version>" User-Agent
// - Optional basic auth from the run configuration
// - Hands the status and Location header to classify()
//
// Rust concepts:
// - Arc<T>: shared, read-only ownership of the RunConfig across tasks
// - async/await: each check is one future, the pool runs several at once
// =============================================================================

use std::sync::Arc;

use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::debug;

use super::classify::{classify, Outcome};
use crate::config::RunConfig;
use crate::error::{CheckError, Result};
use crate::rules::{resolve, Rule};

/// User-Agent sent with every request.
pub fn user_agent() -> String {
    format!("Redirect Tester v{}", env!("CARGO_PKG_VERSION"))
}

/// Checks rules against the site in a RunConfig.
//
// Client is cheap to clone (it's a reference counter internally), so the
// checker is too.
#[derive(Clone)]
pub struct RedirectChecker {
    client: Client,
    config: Arc<RunConfig>,
}

impl RedirectChecker {
    pub fn new(config: Arc<RunConfig>) -> Result<Self> {
        // No timeout here on purpose: the transport default applies
        let client = Client::builder()
            .redirect(Policy::none())
            .user_agent(user_agent())
            .build()?;

        Ok(Self { client, config })
    }

    /// Runs one rule: request, then classify.
    ///
    /// Transport failures come back as Outcome::Fatal, never as a Mismatch.
    pub async fn check(&self, rule: Rule) -> Outcome {
        let target = resolve(&rule.old_path, &self.config.site_url);
        debug!(row = rule.row, url = %target, "Requesting");

        let mut request = self.client.get(&target);
        if let Some(creds) = &self.config.credentials {
            request = request.basic_auth(&creds.user, creds.pass.as_ref());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Outcome::fatal(CheckError::Transport(e)),
        };

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

        debug!(row = rule.row, status, location = ?location, "Response");

        classify(&rule, status, location.as_deref(), &self.config.site_url)
    }
}
