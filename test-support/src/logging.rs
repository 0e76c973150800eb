//! Log capture for tests.
//!
//! Installs a thread-local `tracing` subscriber that writes into memory, so
//! a test can assert on what a wait logged without touching the global
//! subscriber or the environment.

#![expect(clippy::expect_used, reason = "poisoned test locks should abort the test")]

use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

/// In-memory sink for formatted log lines.
///
/// # Examples
///
/// ```
/// use test_support::LogCapture;
///
/// let logs = LogCapture::new();
/// let _guard = logs.install("info");
/// tracing::info!("captured");
/// assert!(logs.contents().contains("captured"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route events on the current thread into this capture until the guard
    /// is dropped. `filter` uses `EnvFilter` directive syntax.
    pub fn install(&self, filter: &str) -> DefaultGuard {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().expect("log buffer lock");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

/// Writer handed out by [`LogCapture`].
#[derive(Debug)]
pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
