//! Rendering of scan results

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::constants::display::{ARROW, UNKNOWN_SIZE};
use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::scanning::ScanResult;

/// Turns a [`ScanResult`] into newline-terminated text.
///
/// Implementations are pure: the same result always renders the same way.
pub trait FormatScanResult: Send + Sync {
    fn format(&self, result: &ScanResult) -> Result<String>;
}

/// `{path} -> {status}` lines, with size and headers in verbose mode.
#[derive(Default, Debug)]
pub struct TextFormatter;

impl FormatScanResult for TextFormatter {
    fn format(&self, result: &ScanResult) -> Result<String> {
        let mut output = format!("{} {ARROW} {}", result.path, result.status_code);

        if result.verbose {
            let size = if result.size_known() {
                result.size.to_string()
            } else {
                UNKNOWN_SIZE.to_string()
            };
            let headers = serde_json::to_string(&result.header_values()?)?;
            output.push_str(&format!(
                " [found={} size={size}]\n  headers: {headers}",
                result.is_found()
            ));
        } else if let Some(location) = result.redirect_location() {
            output.push_str(&format!(" [{location}]"));
        }

        output.push('\n');
        Ok(output)
    }
}

/// Shape of one line of JSON output
#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    url: String,
    path: &'a str,
    status: u16,
    size: i64,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<BTreeMap<&'a str, Vec<&'a str>>>,
}

/// One JSON object per line
#[derive(Default, Debug)]
pub struct JsonFormatter;

impl FormatScanResult for JsonFormatter {
    fn format(&self, result: &ScanResult) -> Result<String> {
        let headers = if result.verbose {
            Some(result.header_values()?)
        } else {
            None
        };
        let line = JsonLine {
            url: result.target_url(),
            path: &result.path,
            status: result.status_code,
            size: result.size,
            found: result.is_found(),
            headers,
        };

        Ok(format!("{}\n", serde_json::to_string(&line)?))
    }
}

/// Formatter for an output format name; unknown names fall back to text.
pub fn formatter_for(output_format: &str) -> Arc<dyn FormatScanResult> {
    match output_format {
        output_formats::JSON => Arc::new(JsonFormatter),
        _ => Arc::new(TextFormatter),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::error::DirProbeError;
    use reqwest::header::{CONTENT_LENGTH, HeaderMap, HeaderValue, LOCATION, SET_COOKIE};

    fn result(path: &str, status_code: u16, verbose: bool, headers: HeaderMap) -> ScanResult {
        ScanResult::new(
            "http://x.test",
            &format!("http://x.test/{path}"),
            verbose,
            status_code,
            headers,
            Some(12),
        )
    }

    #[test]
    fn test_text_format__found() -> Result<()> {
        let actual = TextFormatter.format(&result("admin", 200, false, HeaderMap::new()))?;
        assert_eq!(actual, "admin -> 200\n");
        Ok(())
    }

    #[test]
    fn test_text_format__redirect_shows_location() -> Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static("/dashboard"));

        let actual = TextFormatter.format(&result("login", 302, false, headers))?;

        assert_eq!(actual, "login -> 302 [/dashboard]\n");
        Ok(())
    }

    #[test]
    fn test_text_format__redirect_without_location() -> Result<()> {
        let actual = TextFormatter.format(&result("moved", 301, false, HeaderMap::new()))?;
        assert_eq!(actual, "moved -> 301\n");
        Ok(())
    }

    #[test]
    fn test_text_format__verbose() -> Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("12"));
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));

        let actual = TextFormatter.format(&result("nope", 404, true, headers))?;

        assert_eq!(
            actual,
            "nope -> 404 [found=false size=12]\n  headers: {\"content-length\":[\"12\"],\"set-cookie\":[\"a=1\",\"b=2\"]}\n"
        );
        Ok(())
    }

    #[test]
    fn test_text_format__verbose_unknown_size() -> Result<()> {
        let mut scan_result = result("stream", 200, true, HeaderMap::new());
        scan_result.size = -1;

        let actual = TextFormatter.format(&scan_result)?;

        assert_eq!(
            actual,
            "stream -> 200 [found=true size=unknown]\n  headers: {}\n"
        );
        Ok(())
    }

    #[test]
    fn test_text_format__is_idempotent() -> Result<()> {
        let mut headers = HeaderMap::new();
        headers.append("x-b", HeaderValue::from_static("2"));
        headers.append("x-a", HeaderValue::from_static("1"));
        let scan_result = result("admin", 200, true, headers);

        assert_eq!(
            TextFormatter.format(&scan_result)?,
            TextFormatter.format(&scan_result)?
        );
        Ok(())
    }

    #[test]
    fn test_text_format__non_text_header_fails_in_verbose() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-legacy",
            HeaderValue::from_bytes(b"caf\xe9").expect("obs-text is a valid header value"),
        );

        let actual = TextFormatter.format(&result("admin", 200, true, headers.clone()));
        assert!(matches!(actual, Err(DirProbeError::Format(_))));

        // Headers are not rendered outside verbose mode
        let actual = TextFormatter.format(&result("admin", 200, false, headers));
        assert!(actual.is_ok());
    }

    #[test]
    fn test_json_format() -> Result<()> {
        let actual = JsonFormatter.format(&result("admin", 200, false, HeaderMap::new()))?;

        assert!(actual.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(actual.trim_end())?;
        assert_eq!(value["url"], "http://x.test/admin");
        assert_eq!(value["path"], "admin");
        assert_eq!(value["status"], 200);
        assert_eq!(value["size"], 12);
        assert_eq!(value["found"], true);
        assert!(value.get("headers").is_none());
        Ok(())
    }

    #[test]
    fn test_json_format__field_order() -> Result<()> {
        let actual = JsonFormatter.format(&result("admin", 200, false, HeaderMap::new()))?;

        assert_eq!(
            actual,
            "{\"url\":\"http://x.test/admin\",\"path\":\"admin\",\"status\":200,\"size\":12,\"found\":true}\n"
        );
        Ok(())
    }

    #[test]
    fn test_json_format__verbose_includes_headers() -> Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static("/dashboard"));

        let actual = JsonFormatter.format(&result("login", 302, true, headers))?;

        let value: serde_json::Value = serde_json::from_str(actual.trim_end())?;
        assert_eq!(value["found"], false);
        assert_eq!(value["headers"]["location"][0], "/dashboard");
        Ok(())
    }

    #[test]
    fn test_formatter_for() -> Result<()> {
        let scan_result = result("admin", 200, false, HeaderMap::new());

        let text = formatter_for(output_formats::TEXT).format(&scan_result)?;
        assert_eq!(text, "admin -> 200\n");

        let json = formatter_for(output_formats::JSON).format(&scan_result)?;
        assert!(json.starts_with('{'));
        Ok(())
    }
}
