use reqwest::header::{HeaderMap, LOCATION};
use std::collections::BTreeMap;

use crate::core::constants::http_status;
use crate::core::error::{DirProbeError, Result};

/// Outcome of one completed probe, ready to be formatted.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Base URL the path was appended to
    pub url: String,
    /// Probed path relative to `url`
    pub path: String,
    pub verbose: bool,
    pub headers: HeaderMap,
    pub status_code: u16,
    /// Declared content length, -1 when the server did not send one
    pub size: i64,
}

impl ScanResult {
    /// Create a result for a response received from `target_url`.
    pub fn new(
        base_url: &str,
        target_url: &str,
        verbose: bool,
        status_code: u16,
        headers: HeaderMap,
        content_length: Option<u64>,
    ) -> Self {
        Self {
            url: base_url.to_string(),
            path: relative_path(base_url, target_url).to_string(),
            verbose,
            headers,
            status_code,
            size: content_length
                .and_then(|len| i64::try_from(len).ok())
                .unwrap_or(-1),
        }
    }

    /// 2xx responses are found, everything else is not.
    pub fn is_found(&self) -> bool {
        http_status::SUCCESS.contains(&self.status_code)
    }

    pub fn is_redirect(&self) -> bool {
        http_status::REDIRECT.contains(&self.status_code)
    }

    pub fn size_known(&self) -> bool {
        self.size >= 0
    }

    /// The URL that was probed
    pub fn target_url(&self) -> String {
        format!("{}/{}", self.url, self.path)
    }

    /// Redirect target, when this is a 3xx with a readable `Location` header
    pub fn redirect_location(&self) -> Option<&str> {
        if !self.is_redirect() {
            return None;
        }
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Headers as a name-sorted map; values keep the order they were received in.
    pub fn header_values(&self) -> Result<BTreeMap<&str, Vec<&str>>> {
        let mut values: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (name, value) in self.headers.iter() {
            let text = value.to_str().map_err(|_| {
                DirProbeError::Format(format!("header '{name}' has a non-text value"))
            })?;
            values.entry(name.as_str()).or_default().push(text);
        }
        Ok(values)
    }
}

/// Strip the `{base_url}/` prefix from `target_url`.
///
/// A target that does not start with that exact prefix is returned unchanged.
pub fn relative_path<'a>(base_url: &str, target_url: &'a str) -> &'a str {
    target_url
        .strip_prefix(base_url)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(target_url)
}
