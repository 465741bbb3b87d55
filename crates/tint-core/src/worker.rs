#![forbid(unsafe_code)]

//! Background preview processing with stale-result protection.
//!
//! Parsing is cheap, but callers on a latency-sensitive path (a text field's
//! change listener) hand it to a worker thread instead. While the worker runs
//! the user keeps typing, so a result may describe text that is no longer in
//! the field.
//!
//! # Staleness
//!
//! Every [`PreviewWorker::submit`] issues a fresh [`RevisionToken`]. Tokens
//! are strictly monotonic; `0` is reserved for "nothing submitted". A result
//! is applied only if its token is the latest issued **and** its source text
//! still equals the caller's current input. Everything else is discarded.
//!
//! The worker also coalesces: when several jobs are queued it parses only
//! the newest one.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tint_text::{MarkupOptions, MarkupParser, StyledText, normalize_segmented};

/// Monotonic id of a submitted preview job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RevisionToken(u64);

impl RevisionToken {
    /// No job submitted yet.
    pub const NONE: Self = Self(0);

    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RevisionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rev({})", self.0)
    }
}

/// Output of one preview job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResult {
    /// Revision the job was submitted under.
    pub token: RevisionToken,
    /// Input text as submitted.
    pub source: String,
    /// Input with segmented colors rewritten (text to re-inject).
    pub processed: String,
    /// Parsed runs.
    pub runs: StyledText,
}

impl PreviewResult {
    fn compute(token: RevisionToken, source: String, options: MarkupOptions) -> Self {
        let processed = if options.segmented_hex {
            normalize_segmented(&source).into_owned()
        } else {
            source.clone()
        };
        let runs = MarkupParser::new(options).parse(&processed);
        Self {
            token,
            source,
            processed,
            runs,
        }
    }
}

struct Job {
    token: RevisionToken,
    text: String,
    options: MarkupOptions,
}

/// Owns one worker thread that parses submitted text.
///
/// Dropping the worker disconnects the job channel and joins the thread.
pub struct PreviewWorker {
    options: MarkupOptions,
    latest: Arc<AtomicU64>,
    jobs: Option<mpsc::Sender<Job>>,
    results: mpsc::Receiver<PreviewResult>,
    thread: Option<thread::JoinHandle<()>>,
}

impl PreviewWorker {
    /// Start the worker thread.
    pub fn spawn(options: MarkupOptions) -> std::io::Result<Self> {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (result_tx, result_rx) = mpsc::channel();
        let latest = Arc::new(AtomicU64::new(0));
        let worker_latest = Arc::clone(&latest);

        let thread = thread::Builder::new()
            .name("tint-preview".into())
            .spawn(move || run_worker(job_rx, result_tx, worker_latest))?;

        tracing::debug!("preview worker started");
        Ok(Self {
            options,
            latest,
            jobs: Some(job_tx),
            results: result_rx,
            thread: Some(thread),
        })
    }

    #[must_use]
    pub fn options(&self) -> MarkupOptions {
        self.options
    }

    /// Options for jobs submitted from now on.
    pub fn set_options(&mut self, options: MarkupOptions) {
        self.options = options;
    }

    /// Latest issued token.
    #[must_use]
    pub fn current_token(&self) -> RevisionToken {
        RevisionToken(self.latest.load(Ordering::Acquire))
    }

    /// Queue `text` for parsing under a fresh token.
    ///
    /// If the worker thread has gone away the token is still issued; no
    /// result will ever arrive for it.
    pub fn submit(&self, text: impl Into<String>) -> RevisionToken {
        let token = RevisionToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1);
        let job = Job {
            token,
            text: text.into(),
            options: self.options,
        };
        let sent = self.jobs.as_ref().is_some_and(|tx| tx.send(job).is_ok());
        if !sent {
            tracing::warn!(%token, "preview worker is gone, job dropped");
        }
        token
    }

    /// Next finished result, if any. Does not block.
    #[must_use]
    pub fn try_recv(&self) -> Option<PreviewResult> {
        self.results.try_recv().ok()
    }

    /// Wait up to `timeout` for the next finished result.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<PreviewResult> {
        self.results.recv_timeout(timeout).ok()
    }

    /// Whether `result` may be applied to a field now holding `current_input`.
    #[must_use]
    pub fn is_current(&self, result: &PreviewResult, current_input: &str) -> bool {
        let latest = self.current_token();
        let current = result.token == latest && result.source == current_input;
        if !current {
            tracing::debug!(
                token = %result.token,
                latest = %latest,
                source_matches = result.source == current_input,
                "discarding stale preview result"
            );
        }
        current
    }

    /// Drain finished results and return the newest one that is current.
    #[must_use]
    pub fn poll_current(&self, current_input: &str) -> Option<PreviewResult> {
        let mut found = None;
        while let Some(result) = self.try_recv() {
            if self.is_current(&result, current_input) {
                found = Some(result);
            }
        }
        found
    }
}

impl fmt::Debug for PreviewWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewWorker")
            .field("options", &self.options)
            .field("latest", &self.current_token())
            .field("running", &self.thread.is_some())
            .finish()
    }
}

impl Drop for PreviewWorker {
    fn drop(&mut self) {
        // Disconnecting the sender ends the worker loop.
        self.jobs.take();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        tracing::debug!("preview worker stopped");
    }
}

fn run_worker(
    jobs: mpsc::Receiver<Job>,
    results: mpsc::Sender<PreviewResult>,
    latest: Arc<AtomicU64>,
) {
    while let Ok(mut job) = jobs.recv() {
        // Latest wins: skip anything already superseded in the queue.
        while let Ok(newer) = jobs.try_recv() {
            tracing::trace!(skipped = %job.token, "preview job superseded");
            job = newer;
        }
        if job.token.raw() < latest.load(Ordering::Acquire) {
            tracing::trace!(token = %job.token, "preview job already stale");
            continue;
        }
        let result = PreviewResult::compute(job.token, job.text, job.options);
        if results.send(result).is_err() {
            break;
        }
    }
}
