use std::fmt;

/// Error types for dirprobe operations
#[derive(Debug)]
pub enum DirProbeError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error (missing or invalid CLI input)
    Config(String),

    /// Wordlist could not be turned into a non-empty list of paths
    Wordlist(String),

    /// File not found error
    FileNotFound(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// A result could not be rendered
    Format(String),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for DirProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirProbeError::Io(err) => write!(f, "IO error: {err}"),
            DirProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DirProbeError::Wordlist(msg) => write!(f, "Wordlist error: {msg}"),
            DirProbeError::FileNotFound(path) => write!(f, "File not found: {path}"),
            DirProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            DirProbeError::Format(msg) => write!(f, "Format error: {msg}"),
            DirProbeError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for DirProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirProbeError::Io(err) => Some(err),
            DirProbeError::Http(err) => Some(err),
            DirProbeError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DirProbeError {
    fn from(err: std::io::Error) -> Self {
        DirProbeError::Io(err)
    }
}

impl From<reqwest::Error> for DirProbeError {
    fn from(err: reqwest::Error) -> Self {
        DirProbeError::Http(err)
    }
}

impl From<serde_json::Error> for DirProbeError {
    fn from(err: serde_json::Error) -> Self {
        DirProbeError::Json(err)
    }
}

/// Type alias for Results using DirProbeError
pub type Result<T> = std::result::Result<T, DirProbeError>;
