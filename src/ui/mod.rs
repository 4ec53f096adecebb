//! User interface and interaction
//!
//! This module contains the CLI definition, result formatting
//! and the output sink results are written to.

pub mod cli;
pub mod formatter;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use formatter::{FormatScanResult, JsonFormatter, TextFormatter, formatter_for};
pub use output::{OutputSink, StdoutSink};
