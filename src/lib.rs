//! dirprobe discovers paths on a web server.
//!
//! Every entry of a wordlist is appended to a base URL and requested once
//! with GET, concurrently across a fixed pool of workers. Responses are
//! classified and written out as they complete.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod scanning;
pub mod ui;

// Re-export commonly used items
pub use crate::config::{CliConfig, Options};
pub use crate::core::{DirProbeError, Result};
pub use crate::scanning::{ScanPaths, ScanResult, ScanSummary, Scanner};
