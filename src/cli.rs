// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage: redirect-tester <file> <url> [options]
//
//   <file>  CSV of old_path,new_path[,expected_status] rows
//   <url>   absolute base URL that relative paths are resolved against
//
// The parsed Cli is turned into a RunConfig (src/config.rs), which does the
// validation clap can't do on its own (absolute URL, file exists, ...).
// =============================================================================

use clap::Parser;

/// Check a list of new URLs for 301 status code and path for correctness.
#[derive(Parser, Debug)]
#[command(
    name = "redirect-tester",
    version,
    override_usage = "redirect-tester <file> <url> [options]",
    about = "Check a list of new URLs for 301 status code and path for correctness."
)]
pub struct Cli {
    /// CSV file of redirect rules: old_path,new_path[,expected_status]
    pub file: String,

    /// Base URL of the site (e.g., https://www.example.com)
    pub url: String,

    /// Save the results to a csv file
    #[arg(short = 'c', long = "csv", value_name = "file", default_value = "./results.csv")]
    pub csv: String,

    /// Don't output error results to the terminal
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of concurrent requests
    // The range parser rejects 0 before we ever build a pool
    #[arg(
        short = 'n',
        long = "number",
        value_name = "integer",
        default_value_t = 5,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub number: u16,

    /// The username and password for basic auth
    #[arg(short, long, value_name = "username:password")]
    pub auth: Option<String>,

    /// Also print the mismatches as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Log what the worker pool is doing (to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
