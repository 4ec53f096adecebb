// Command-line interface definitions and parsing for dirprobe

use crate::config::CliConfig;
use crate::core::constants::{defaults, output_formats};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Target
    /// The base URL to scan
    #[arg(short = 'u', long, value_name = "URL", help_heading = "Target")]
    pub url: Option<String>,

    /// Path to the wordlist file
    #[arg(short = 'w', long, value_name = "FILE", help_heading = "Target")]
    pub wordlist: Option<String>,

    // Performance
    /// Number of concurrent workers
    #[arg(short = 't', long, value_name = "COUNT", default_value_t = defaults::THREADS, help_heading = "Performance")]
    pub threads: usize,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECONDS", help_heading = "Performance")]
    pub timeout: Option<u64>,

    // Output & Verbosity
    /// Report every response and every failed request
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        url: cli.url.clone(),
        wordlist_path: cli.wordlist.clone(),
        threads: cli.threads,
        verbose: cli.verbose,
        timeout: cli.timeout,
        output_format: cli.format.clone(),
    }
}
