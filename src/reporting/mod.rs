//! Structured logging
//!
//! Debug-level tracing of a scan, enabled in verbose mode.

pub mod logging;
