//! Output sinks and the quiet-mode gate
//!
//! Help rendering and error reporting write through an injectable sink
//! instead of touching the process streams directly: [`StdStreams`] in
//! production, [`MemorySink`] in tests. [`OutputGate`] wraps a sink and
//! implements quiet mode by discarding every write while active.

use std::{
    io::{self, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, PoisonError,
    },
};

use is_terminal::IsTerminal;

/// Line-oriented output destination for help text and error reporting
pub trait OutputSink: Send + Sync {
    /// Write a line to the standard output stream
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying stream write fails
    fn out(&self, line: &str) -> io::Result<()>;

    /// Write a line to the standard error stream
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying stream write fails
    fn err(&self, line: &str) -> io::Result<()>;

    /// Whether the sink supports ANSI color
    fn supports_color(&self) -> bool {
        false
    }
}

/// Production sink writing to the process streams
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStreams;

impl OutputSink for StdStreams {
    fn out(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")
    }

    fn err(&self, line: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{line}")
    }

    fn supports_color(&self) -> bool {
        io::stdout().is_terminal()
    }
}

/// In-memory sink collecting lines for assertions in tests
#[derive(Debug, Default)]
pub struct MemorySink {
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to the output stream so far
    #[must_use]
    pub fn out_lines(&self) -> Vec<String> {
        self.out
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines written to the error stream so far
    #[must_use]
    pub fn err_lines(&self) -> Vec<String> {
        self.err
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OutputSink for MemorySink {
    fn out(&self, line: &str) -> io::Result<()> {
        self.out
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }

    fn err(&self, line: &str) -> io::Result<()> {
        self.err
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

/// Run-wide toggle that discards console output while active.
///
/// A boolean gate, not a counter: repeated activations collapse into one,
/// and a single deactivation restores pass-through no matter how many
/// times `activate` was called. Both directions are idempotent, so the
/// gate tolerates repeated calls across nested error paths.
pub struct OutputGate {
    inner: Arc<dyn OutputSink>,
    muted: AtomicBool,
}

impl OutputGate {
    /// Wrap an inner sink with an inactive gate
    #[must_use]
    pub fn new(inner: Arc<dyn OutputSink>) -> Self {
        Self {
            inner,
            muted: AtomicBool::new(false),
        }
    }

    /// Begin discarding output; a no-op when already active
    pub fn activate(&self) {
        self.muted.store(true, Ordering::SeqCst);
    }

    /// Restore pass-through; a no-op when already inactive
    pub fn deactivate(&self) {
        self.muted.store(false, Ordering::SeqCst);
    }

    /// Whether writes are currently being discarded
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }
}

impl OutputSink for OutputGate {
    fn out(&self, line: &str) -> io::Result<()> {
        if self.is_active() {
            return Ok(());
        }
        self.inner.out(line)
    }

    fn err(&self, line: &str) -> io::Result<()> {
        if self.is_active() {
            return Ok(());
        }
        self.inner.err(line)
    }

    fn supports_color(&self) -> bool {
        self.inner.supports_color()
    }
}
