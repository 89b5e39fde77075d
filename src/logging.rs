// src/logging.rs
// Structured logging to stderr. stdout is kept for the run summary and --json.
//
// RUST_LOG wins when set. Otherwise only warnings, or everything from this
// crate with --verbose.

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,redirect_tester=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // try_init: a second call (tests) is not an error worth crashing over
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
