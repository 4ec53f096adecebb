use crate::config::Options;
use crate::scanning::ScanSummary;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool) {
    let rust_log_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    let level = level_override(verbose, rust_log_set);

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let initialized = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    if initialized.is_ok() {
        debug!("Logger initialized with level: {level:?}");
    }
}

/// Level forced on top of `RUST_LOG`. Verbose always means debug; otherwise
/// logging is off unless `RUST_LOG` asks for it.
fn level_override(verbose: bool, rust_log_set: bool) -> Option<log::LevelFilter> {
    if verbose {
        Some(log::LevelFilter::Debug)
    } else if rust_log_set {
        None
    } else {
        Some(log::LevelFilter::Off)
    }
}

/// Log the settings a scan starts with
pub fn log_scan_start(options: &Options) {
    info!(
        "Scanning {} with {} path(s) on {} worker(s)",
        options.base_url(),
        options.wordlist().len(),
        options.threads()
    );
    match options.timeout_duration() {
        Some(timeout) => debug!("Request timeout: {}s", timeout.as_secs()),
        None => debug!("Request timeout: none"),
    }
}

/// Log one received response
pub fn log_probe_result(url: &str, status: u16) {
    debug!("{url} -> {status}");
}

/// Log a request that got no response
pub fn log_probe_failure(url: &str, err: &reqwest::Error) {
    debug!("✗ {url} -> {err}");
}

/// Log how the paths of a finished scan were accounted for
pub fn log_scan_complete(summary: &ScanSummary, duration_ms: u128) {
    if summary.failed == 0 && summary.format_errors == 0 {
        info!(
            "Scan complete: {} path(s), {} reported, {} suppressed ({duration_ms}ms)",
            summary.total(),
            summary.reported,
            summary.suppressed
        );
    } else {
        warn!(
            "Scan complete: {} path(s), {} reported, {} suppressed, {} failed, {} unformattable ({duration_ms}ms)",
            summary.total(),
            summary.reported,
            summary.suppressed,
            summary.failed,
            summary.format_errors
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
