use clap::{CommandFactory, Parser};
use dirprobe::config::{CliConfig, Options};
use dirprobe::core::Result;
use dirprobe::discovery::load_wordlist;
use dirprobe::reporting::logging;
use dirprobe::scanning::{ScanPaths, Scanner};
use dirprobe::ui::{Cli, StdoutSink, cli_to_config};

use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let cli_config = cli_to_config(&cli);

    // Required inputs are checked here so usage can be shown alongside the error
    if let Err(e) = cli_config.required_inputs() {
        eprintln!("Error: {e}");
        eprintln!("\n{}", Cli::command().render_help());
        std::process::exit(1);
    }

    match run_dirprobe_logic(&cli_config).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main scan logic extracted from main() for testing
pub async fn run_dirprobe_logic(cli_config: &CliConfig) -> Result<i32> {
    logging::init_logger(cli_config.verbose);

    let options = load_options(cli_config)?;
    let scanner = Scanner::from_options(&options).inspect_err(|e| {
        logging::log_error("Could not create HTTP client", Some(e));
    })?;

    scanner.scan_paths(&options, Arc::new(StdoutSink)).await;

    // Per-path failures never change the exit code
    Ok(0)
}

/// Load the wordlist and assemble validated options
pub fn load_options(cli_config: &CliConfig) -> Result<Options> {
    let (_, wordlist_path) = cli_config.required_inputs()?;

    let wordlist = load_wordlist(Path::new(wordlist_path)).inspect_err(|e| {
        logging::log_error(&format!("Could not load wordlist '{wordlist_path}'"), Some(e));
    })?;

    Options::from_cli(cli_config, wordlist)
}
