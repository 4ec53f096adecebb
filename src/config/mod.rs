//! Configuration management
//!
//! This module turns CLI arguments and a loaded wordlist into the
//! immutable [`Options`] a scan runs with.

use std::time::Duration;

use crate::core::constants::{defaults, network, output_formats};
use crate::core::error::{DirProbeError, Result};

/// Settings for a single scan. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Options {
    base_url: String,
    wordlist: Vec<String>,
    threads: usize,
    verbose: bool,
    timeout: Option<u64>,
    output_format: String,
}

impl Options {
    /// Create options with default threads, no timeout and text output.
    ///
    /// Trailing slashes are stripped from `base_url` so that
    /// `base_url + "/" + path` is always the probed URL.
    pub fn new(base_url: &str, wordlist: Vec<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            wordlist,
            threads: defaults::THREADS,
            verbose: false,
            timeout: None,
            output_format: output_formats::DEFAULT.to_string(),
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Request timeout in seconds; `None` leaves requests unbounded.
    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_output_format(mut self, output_format: &str) -> Self {
        self.output_format = output_format.to_string();
        self
    }

    /// Assemble validated options from CLI input and the loaded wordlist
    pub fn from_cli(cli_config: &CliConfig, wordlist: Vec<String>) -> Result<Self> {
        let (url, _) = cli_config.required_inputs()?;
        let options = Options::new(url, wordlist)
            .with_threads(cli_config.threads)
            .with_verbose(cli_config.verbose)
            .with_timeout(cli_config.timeout)
            .with_output_format(&cli_config.output_format);
        options.validate()?;
        Ok(options)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn wordlist(&self) -> &[String] {
        &self.wordlist
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Full URL for one wordlist entry
    pub fn target_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let parsed = reqwest::Url::parse(&self.base_url).map_err(|err| {
            DirProbeError::Config(format!("Base URL '{}' is not valid: {err}", self.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(DirProbeError::Config(format!(
                "Base URL '{}' must be an absolute http:// or https:// URL.",
                self.base_url
            )));
        }

        if self.wordlist.is_empty() {
            return Err(DirProbeError::Wordlist("wordlist is empty".to_string()));
        }

        if self.threads == 0 {
            return Err(DirProbeError::Config(
                "Thread count cannot be 0. Expected a positive integer.".to_string(),
            ));
        }
        if self.threads > defaults::MAX_THREADS {
            return Err(DirProbeError::Config(format!(
                "Thread count of {} is too high. Expected at most {}.",
                self.threads,
                defaults::MAX_THREADS
            )));
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(DirProbeError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > network::MAX_TIMEOUT_SECONDS {
                return Err(DirProbeError::Config(format!(
                    "Timeout of {timeout} seconds is too large. Expected at most {} seconds.",
                    network::MAX_TIMEOUT_SECONDS
                )));
            }
        }

        if !output_formats::ALL.contains(&self.output_format.as_str()) {
            return Err(DirProbeError::Config(format!(
                "Invalid output format '{}'. Expected one of: {}.",
                self.output_format,
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug)]
pub struct CliConfig {
    pub url: Option<String>,           // --url
    pub wordlist_path: Option<String>, // --wordlist
    pub threads: usize,                // --threads
    pub verbose: bool,                 // --verbose
    pub timeout: Option<u64>,          // --timeout
    pub output_format: String,         // --format
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            url: None,
            wordlist_path: None,
            threads: defaults::THREADS,
            verbose: false,
            timeout: None,
            output_format: output_formats::DEFAULT.to_string(),
        }
    }
}

impl CliConfig {
    /// The base URL and wordlist path, both of which must be present and non-empty
    pub fn required_inputs(&self) -> Result<(&str, &str)> {
        let url = self.url.as_deref().filter(|url| !url.trim().is_empty());
        let wordlist = self.wordlist_path.as_deref().filter(|p| !p.trim().is_empty());

        match (url, wordlist) {
            (Some(url), Some(wordlist)) => Ok((url, wordlist)),
            _ => Err(DirProbeError::Config(
                "URL and wordlist are required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_options_default() {
        let options = Options::new("http://x.test", words(&["admin"]));
        assert_eq!(options.threads(), defaults::THREADS);
        assert!(!options.verbose());
        assert_eq!(options.timeout_duration(), None);
        assert_eq!(options.output_format(), output_formats::DEFAULT);
    }

    #[test]
    fn test_options_strips_trailing_slashes() {
        let options = Options::new("http://x.test///", words(&["admin"]));
        assert_eq!(options.base_url(), "http://x.test");
        assert_eq!(options.target_url("admin"), "http://x.test/admin");
    }

    #[test]
    fn test_target_url_keeps_path_verbatim() {
        let options = Options::new("http://x.test/app", words(&["a b"]));
        assert_eq!(options.target_url("a b"), "http://x.test/app/a b");
        assert_eq!(options.target_url("/lead"), "http://x.test/app//lead");
    }

    #[test]
    fn test_timeout_duration() {
        let options = Options::new("http://x.test", words(&["a"])).with_timeout(Some(7));
        assert_eq!(options.timeout_duration(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_validate_valid_options() -> Result<()> {
        Options::new("https://example.com/", words(&["admin", "login"]))
            .with_threads(1)
            .with_timeout(Some(10))
            .with_output_format(output_formats::JSON)
            .validate()
    }

    #[test]
    fn test_validate_zero_threads() {
        let result = Options::new("http://x.test", words(&["a"]))
            .with_threads(0)
            .validate();
        assert!(matches!(result, Err(DirProbeError::Config(_))));
    }

    #[test]
    fn test_validate_huge_threads() {
        let result = Options::new("http://x.test", words(&["a"]))
            .with_threads(1usize << 62)
            .validate();
        assert!(matches!(result, Err(DirProbeError::Config(_))));

        let result = Options::new("http://x.test", words(&["a"]))
            .with_threads(defaults::MAX_THREADS + 1)
            .validate();
        assert!(matches!(result, Err(DirProbeError::Config(_))));
    }

    #[test]
    fn test_validate_max_threads() -> Result<()> {
        Options::new("http://x.test", words(&["a"]))
            .with_threads(defaults::MAX_THREADS)
            .validate()
    }

    #[test]
    fn test_validate_zero_timeout() {
        let result = Options::new("http://x.test", words(&["a"]))
            .with_timeout(Some(0))
            .validate();
        assert!(matches!(result, Err(DirProbeError::Config(_))));
    }

    #[test]
    fn test_validate_huge_timeout() {
        let result = Options::new("http://x.test", words(&["a"]))
            .with_timeout(Some(network::MAX_TIMEOUT_SECONDS + 1))
            .validate();
        assert!(matches!(result, Err(DirProbeError::Config(_))));
    }

    #[test]
    fn test_validate_empty_wordlist() {
        let result = Options::new("http://x.test", vec![]).validate();
        assert!(matches!(result, Err(DirProbeError::Wordlist(_))));
    }

    #[test]
    fn test_validate_invalid_base_url() {
        for url in ["not a url", "x.test", "ftp://x.test", "file:///etc"] {
            let result = Options::new(url, words(&["a"])).validate();
            assert!(
                matches!(result, Err(DirProbeError::Config(_))),
                "expected config error for {url}"
            );
        }
    }

    #[test]
    fn test_validate_invalid_output_format() {
        let result = Options::new("http://x.test", words(&["a"]))
            .with_output_format("xml")
            .validate();
        assert!(matches!(result, Err(DirProbeError::Config(_))));
    }

    #[test]
    fn test_cli_config_default() {
        let cli_config = CliConfig::default();
        assert_eq!(cli_config.threads, defaults::THREADS);
        assert!(!cli_config.verbose);
        assert!(cli_config.required_inputs().is_err());
    }

    #[test]
    fn test_required_inputs_missing_one() {
        let cli_config = CliConfig {
            url: Some("http://x.test".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            cli_config.required_inputs(),
            Err(DirProbeError::Config(_))
        ));

        let cli_config = CliConfig {
            url: Some("".to_string()),
            wordlist_path: Some("words.txt".to_string()),
            ..Default::default()
        };
        assert!(cli_config.required_inputs().is_err());
    }

    #[test]
    fn test_from_cli() -> Result<()> {
        let cli_config = CliConfig {
            url: Some("http://x.test/".to_string()),
            wordlist_path: Some("words.txt".to_string()),
            threads: 4,
            verbose: true,
            timeout: Some(3),
            output_format: output_formats::TEXT.to_string(),
        };

        let options = Options::from_cli(&cli_config, words(&["admin"]))?;
        assert_eq!(options.base_url(), "http://x.test");
        assert_eq!(options.threads(), 4);
        assert!(options.verbose());
        assert_eq!(options.timeout_duration(), Some(Duration::from_secs(3)));
        assert_eq!(options.wordlist(), ["admin".to_string()]);
        Ok(())
    }
}
