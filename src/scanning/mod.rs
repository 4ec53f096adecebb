//! Path probing
//!
//! This module builds the HTTP client, probes target URLs and
//! runs the worker pool that drives a scan.

pub mod client;
pub mod dispatcher;
pub mod prober;
pub mod result;

// Re-export commonly used items
pub use client::build_client;
pub use dispatcher::{ScanPaths, ScanSummary, Scanner};
pub use prober::{ProbeOutcome, Prober};
pub use result::ScanResult;
