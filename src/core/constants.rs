//! Application-wide constants to avoid magic values throughout the codebase.

/// Output format constants
pub mod output_formats {
    /// Text output format - one line per result, expanded block in verbose mode
    pub const TEXT: &str = "text";
    /// JSON output format - one object per line for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// HTTP status code ranges used to classify responses
pub mod http_status {
    use std::ops::Range;

    /// Responses in this range are reported as found
    pub const SUCCESS: Range<u16> = 200..300;
    /// Redirect responses, reported as-is
    pub const REDIRECT: Range<u16> = 300..400;
    /// Client errors, suppressed unless verbose
    pub const CLIENT_ERROR: Range<u16> = 400..500;
}

/// Connection pool and timing constants
pub mod network {
    /// Close idle pooled connections after this many seconds
    pub const IDLE_CONNECTION_TIMEOUT_SECONDS: u64 = 90;
    /// Maximum reasonable request timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
}

/// Default configuration values
pub mod defaults {
    /// Default worker pool size
    pub const THREADS: usize = 150;
    /// Largest accepted worker pool size
    pub const MAX_THREADS: usize = 1000;
}

/// Display and formatting constants
pub mod display {
    /// Separator between a path and its status code
    pub const ARROW: &str = "->";
    /// Rendered in place of a size the server did not report
    pub const UNKNOWN_SIZE: &str = "unknown";
}

/// Wordlist file constants
pub mod files {
    /// Lines starting with this marker are skipped
    pub const COMMENT_PREFIX: char = '#';
}
