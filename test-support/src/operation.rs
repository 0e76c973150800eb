//! Scripted operations for exercising waits.
//!
//! A [`Countdown`] returns `None` until a chosen call, then its value on
//! every later call. Clones share the same call log, so a test can hand a
//! clone to the waiter and inspect the original afterwards.

#![expect(clippy::expect_used, reason = "poisoned test locks should abort the test")]

use std::sync::{Arc, Mutex};
use std::time::Instant;
use thiserror::Error;

/// Error returned by a [`Countdown`] configured with [`Countdown::failing_on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("scripted failure on call {call}")]
pub struct ScriptedFailure {
    /// The call that failed, counting from one.
    pub call: u32,
}

/// An operation that becomes ready on a given call.
#[derive(Debug, Clone)]
pub struct Countdown<T> {
    ready_on: u32,
    fail_on: Option<u32>,
    value: T,
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl<T: Clone> Countdown<T> {
    /// Produce `value` from call `ready_on` onwards (counting from one).
    ///
    /// # Examples
    ///
    /// ```
    /// use test_support::Countdown;
    ///
    /// let op = Countdown::new(2, "ready");
    /// assert_eq!(op.poll(), None);
    /// assert_eq!(op.poll(), Some("ready"));
    /// assert_eq!(op.calls(), 2);
    /// ```
    pub fn new(ready_on: u32, value: T) -> Self {
        Self {
            ready_on,
            fail_on: None,
            value,
            calls: Arc::default(),
        }
    }

    /// An operation that never becomes ready.
    pub fn never(value: T) -> Self {
        Self::new(u32::MAX, value)
    }

    /// Fail with [`ScriptedFailure`] on call `call` instead of answering.
    #[must_use]
    pub fn failing_on(mut self, call: u32) -> Self {
        self.fail_on = Some(call);
        self
    }

    /// Invoke the operation, treating a scripted failure as `None`.
    pub fn poll(&self) -> Option<T> {
        self.try_poll().ok().flatten()
    }

    /// Invoke the operation.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptedFailure`] on the call chosen with
    /// [`Countdown::failing_on`].
    pub fn try_poll(&self) -> Result<Option<T>, ScriptedFailure> {
        let call = self.record();
        if self.fail_on == Some(call) {
            return Err(ScriptedFailure { call });
        }
        Ok((call >= self.ready_on).then(|| self.value.clone()))
    }

    /// Async form of [`Countdown::poll`].
    pub async fn poll_async(&self) -> Option<T> {
        self.poll()
    }

    /// Async form of [`Countdown::try_poll`].
    ///
    /// # Errors
    ///
    /// See [`Countdown::try_poll`].
    pub async fn try_poll_async(&self) -> Result<Option<T>, ScriptedFailure> {
        self.try_poll()
    }
}

impl<T> Countdown<T> {
    /// Number of invocations so far.
    pub fn calls(&self) -> u32 {
        u32::try_from(self.call_times().len()).unwrap_or(u32::MAX)
    }

    /// When each invocation happened, read from tokio's clock so paused
    /// tests see virtual time.
    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().expect("call log lock").clone()
    }

    fn record(&self) -> u32 {
        let mut calls = self.calls.lock().expect("call log lock");
        calls.push(tokio::time::Instant::now().into_std());
        u32::try_from(calls.len()).unwrap_or(u32::MAX)
    }
}
