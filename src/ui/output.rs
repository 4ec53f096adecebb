//! Where formatted results and diagnostics are written

use std::io::{self, Write};

use crate::reporting::logging;

/// Destination for formatted output, shared by all workers of a scan.
pub trait OutputSink: Send + Sync {
    /// Write `text` immediately. Text is already newline-terminated.
    fn emit(&self, text: &str);
}

/// Writes to stdout and flushes after every write
#[derive(Default, Debug)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
        {
            logging::log_error("Could not write to stdout", Some(&err));
        }
    }
}

/// Keeps everything emitted, for assertions
#[cfg(test)]
#[derive(Default, Debug)]
pub(crate) struct CollectingSink {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl CollectingSink {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub(crate) fn sorted_lines(&self) -> Vec<String> {
        let mut lines = self.lines();
        lines.sort();
        lines
    }
}

#[cfg(test)]
impl OutputSink for CollectingSink {
    fn emit(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}
