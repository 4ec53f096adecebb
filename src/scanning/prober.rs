use reqwest::Client;

use crate::core::constants::http_status;
use crate::reporting::logging;
use crate::scanning::result::ScanResult;

/// What happened to a single probed URL.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// A response worth reporting
    Reported(ScanResult),
    /// A 4xx response dropped because verbose mode is off
    Suppressed { url: String, status_code: u16 },
    /// No response: DNS, connect, reset, timeout...
    Failed { url: String, error: reqwest::Error },
}

impl ProbeOutcome {
    /// One-line description of a transport failure, naming every cause
    /// down to the innermost one.
    pub fn failure_description(&self) -> Option<String> {
        match self {
            ProbeOutcome::Failed { url, error } => {
                Some(format!("Error fetching {url}: {}", error_chain(error)))
            }
            _ => None,
        }
    }
}

/// `source()` chain of `error` joined with `: `. The top-level reqwest
/// message only repeats the URL, so it is used only when there is no source.
fn error_chain(error: &reqwest::Error) -> String {
    let mut causes = Vec::new();
    let mut current = std::error::Error::source(error);
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }

    if causes.is_empty() {
        error.to_string()
    } else {
        causes.join(": ")
    }
}

/// Sends one GET per URL and classifies the response.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    base_url: String,
    verbose: bool,
}

impl Prober {
    pub fn new(client: Client, base_url: &str, verbose: bool) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            verbose,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Probe `target_url` exactly once.
    pub async fn probe(&self, target_url: &str) -> ProbeOutcome {
        let response = match self.client.get(target_url).send().await {
            Ok(response) => response,
            Err(error) => {
                logging::log_probe_failure(target_url, &error);
                return ProbeOutcome::Failed {
                    url: target_url.to_string(),
                    error,
                };
            }
        };

        let status_code = response.status().as_u16();
        let content_length = response.content_length();
        let headers = response.headers().clone();
        // The body is never read; release the connection now.
        drop(response);

        logging::log_probe_result(target_url, status_code);

        if !self.verbose && http_status::CLIENT_ERROR.contains(&status_code) {
            return ProbeOutcome::Suppressed {
                url: target_url.to_string(),
                status_code,
            };
        }

        ProbeOutcome::Reported(ScanResult::new(
            &self.base_url,
            target_url,
            self.verbose,
            status_code,
            headers,
            content_length,
        ))
    }
}
