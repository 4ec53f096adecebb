use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, mpsc};
use tokio::time::Instant;

use crate::config::Options;
use crate::core::error::Result;
use crate::reporting::logging;
use crate::scanning::client::build_client;
use crate::scanning::prober::{ProbeOutcome, Prober};
use crate::ui::formatter::{FormatScanResult, formatter_for};
use crate::ui::output::OutputSink;

#[async_trait]
pub trait ScanPaths {
    /// Probe every wordlist entry of `options`, writing output to `sink` as
    /// results arrive. Returns once every entry has been processed.
    async fn scan_paths(&self, options: &Options, sink: Arc<dyn OutputSink>) -> ScanSummary;
}

/// How every probed path of a scan was accounted for
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub reported: usize,
    pub suppressed: usize,
    pub failed: usize,
    pub format_errors: usize,
}

impl ScanSummary {
    pub fn total(&self) -> usize {
        self.reported + self.suppressed + self.failed + self.format_errors
    }
}

#[derive(Debug, Default)]
struct ScanTally {
    reported: AtomicUsize,
    suppressed: AtomicUsize,
    failed: AtomicUsize,
    format_errors: AtomicUsize,
}

impl ScanTally {
    fn summary(&self) -> ScanSummary {
        ScanSummary {
            reported: self.reported.load(Ordering::Relaxed),
            suppressed: self.suppressed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            format_errors: self.format_errors.load(Ordering::Relaxed),
        }
    }
}

/// Everything a worker needs, shared by all workers of one scan
struct WorkerContext {
    prober: Prober,
    formatter: Arc<dyn FormatScanResult>,
    sink: Arc<dyn OutputSink>,
    tally: ScanTally,
}

impl WorkerContext {
    fn handle(&self, outcome: ProbeOutcome) {
        match outcome {
            ProbeOutcome::Reported(result) => match self.formatter.format(&result) {
                Ok(text) => {
                    self.sink.emit(&text);
                    self.tally.reported.fetch_add(1, Ordering::Relaxed);
                }
                Err(err) => {
                    self.sink
                        .emit(&format!("Error converting result to string: {err}\n"));
                    self.tally.format_errors.fetch_add(1, Ordering::Relaxed);
                }
            },
            ProbeOutcome::Suppressed { .. } => {
                self.tally.suppressed.fetch_add(1, Ordering::Relaxed);
            }
            failed @ ProbeOutcome::Failed { .. } => {
                if self.prober.verbose()
                    && let Some(description) = failed.failure_description()
                {
                    self.sink.emit(&format!("{description}\n"));
                }
                self.tally.failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

/// Fixed-size worker pool fed from a bounded queue of target URLs.
pub struct Scanner {
    client: reqwest::Client,
    formatter: Arc<dyn FormatScanResult>,
}

impl Scanner {
    pub fn new(client: reqwest::Client, formatter: Arc<dyn FormatScanResult>) -> Self {
        Self { client, formatter }
    }

    /// Scanner with a client and formatter configured from `options`
    pub fn from_options(options: &Options) -> Result<Self> {
        let client = build_client(options.threads(), options.timeout_duration())?;
        Ok(Self::new(client, formatter_for(options.output_format())))
    }
}

#[async_trait]
impl ScanPaths for Scanner {
    async fn scan_paths(&self, options: &Options, sink: Arc<dyn OutputSink>) -> ScanSummary {
        let started = Instant::now();
        let threads = options.threads().max(1);
        logging::log_scan_start(options);

        let (sender, receiver) = mpsc::channel::<String>(threads);
        let queue = Arc::new(Mutex::new(receiver));
        let context = Arc::new(WorkerContext {
            prober: Prober::new(self.client.clone(), options.base_url(), options.verbose()),
            formatter: Arc::clone(&self.formatter),
            sink,
            tally: ScanTally::default(),
        });

        let workers: Vec<_> = (0..threads)
            .map(|_| tokio::spawn(run_worker(Arc::clone(&queue), Arc::clone(&context))))
            .collect();

        for path in options.wordlist() {
            if sender.send(options.target_url(path)).await.is_err() {
                logging::log_error("All workers stopped before the wordlist was drained", None);
                break;
            }
        }
        // Closing the queue lets workers exit once it is drained
        drop(sender);

        for joined in join_all(workers).await {
            if let Err(err) = joined {
                logging::log_error("Worker task failed", Some(&err));
            }
        }

        let summary = context.tally.summary();
        logging::log_scan_complete(&summary, started.elapsed().as_millis());
        summary
    }
}

async fn run_worker(queue: Arc<Mutex<mpsc::Receiver<String>>>, context: Arc<WorkerContext>) {
    loop {
        let next = queue.lock().await.recv().await;
        let Some(target_url) = next else {
            break;
        };
        let outcome = context.prober.probe(&target_url).await;
        context.handle(outcome);
    }
}
