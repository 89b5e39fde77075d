// src/main.rs
// =============================================================================
// This is the entry point of redirect-tester.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate them into a RunConfig and read the rules CSV
//    (any problem here: error + usage on stderr, no request is made)
// 3. Run every rule through the bounded worker pool
// 4. Hand the pool's report to the report sink
// 5. Exit with proper code (0 = all good, 1 = mismatches, 2 = error)
// =============================================================================

mod checker;
mod cli;
mod config;
mod error;
mod logging;
mod pool;
mod report;
mod rules;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use checker::RedirectChecker;
use cli::Cli;
use config::RunConfig;
use error::CheckError;
use report::ExitStatus;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(status) => status.code(),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitStatus::Failed.code()
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<ExitStatus> {
    // --help and --version exit inside parse()
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let (config, input) = match RunConfig::from_cli(&cli) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(usage_error(&e)),
    };

    let records = match rules::read_records(&input) {
        Ok(records) => records,
        Err(e) => return Ok(usage_error(&e)),
    };

    let config = Arc::new(config);
    let checker = RedirectChecker::new(Arc::clone(&config))?;

    report::announce_start(&config);
    let pool_report = pool::run_pool(records, config.concurrency, |rule| checker.check(rule)).await;

    report::finish(pool_report, &config)
}

/// Prints the error and the usage text to stderr.
fn usage_error(error: &CheckError) -> ExitStatus {
    eprintln!("❌ Error: {}", error);
    eprintln!("{}", Cli::command().render_help());
    ExitStatus::Failed
}
