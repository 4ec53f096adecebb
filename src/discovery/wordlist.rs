use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::core::constants::files::COMMENT_PREFIX;
use crate::core::error::{DirProbeError, Result};

/// Read a newline-delimited wordlist into an ordered list of paths.
///
/// Blank lines and lines starting with `#` are skipped and a trailing `\r`
/// is removed. Everything else is kept verbatim, including leading
/// slashes and inner whitespace, so each entry is appended to the base URL
/// exactly as written.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    debug!("Reading wordlist from {}", path.display());

    if path.is_dir() {
        return Err(DirProbeError::Wordlist(format!(
            "'{}' is a directory, expected a file",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DirProbeError::FileNotFound(path.display().to_string()),
        _ => DirProbeError::Wordlist(format!("could not open wordlist file: {err}")),
    })?;

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|err| {
            DirProbeError::Wordlist(format!("error reading wordlist file: {err}"))
        })?;
        if let Some(entry) = parse_entry(&line) {
            entries.push(entry.to_string());
        }
    }

    if entries.is_empty() {
        return Err(DirProbeError::Wordlist("wordlist is empty".to_string()));
    }

    debug!("Loaded {} wordlist entries", entries.len());
    Ok(entries)
}

fn parse_entry(line: &str) -> Option<&str> {
    let entry = line.strip_suffix('\r').unwrap_or(line);
    if entry.trim().is_empty() || entry.starts_with(COMMENT_PREFIX) {
        None
    } else {
        Some(entry)
    }
}
