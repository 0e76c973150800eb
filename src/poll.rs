//! Polling until an operation yields a value.
//!
//! Each wait invokes the operation immediately, then keeps invoking it on a
//! fixed interval until it returns `Some`, the operation fails, or the
//! deadline passes. No attempt is started once the deadline has been
//! reached.

use std::borrow::Cow;
use std::convert::Infallible;
use std::thread;
use std::time::Instant;
use tracing::{debug, trace, warn};

use crate::config::WaitConfig;
use crate::error::{Timeout, WaitError};

mod nonblocking;
mod tracker;


use tracker::Tracker;

const DEFAULT_LABEL: &str = "operation";

/// A configured poller.
///
/// The configuration is fixed when the waiter is built, so concurrent tests
/// holding their own `Waiter` never observe each other's limits.
///
/// # Examples
///
/// ```
/// use waiter::{WaitConfig, Waiter};
///
/// let waiter = Waiter::new(WaitConfig::default().with_poll_interval_ms(1)).named("counter");
/// let mut calls = 0;
/// let value = waiter
///     .until_some(|| {
///         calls += 1;
///         (calls == 3).then_some("ready")
///     })
///     .expect("value before deadline");
/// assert_eq!(value, "ready");
/// ```
#[derive(Debug, Clone)]
pub struct Waiter {
    config: WaitConfig,
    label: Cow<'static, str>,
}

impl Default for Waiter {
    fn default() -> Self {
        Self::from_process_default()
    }
}

impl Waiter {
    /// Build a waiter with explicit limits.
    pub fn new(config: WaitConfig) -> Self {
        Self {
            config,
            label: Cow::Borrowed(DEFAULT_LABEL),
        }
    }

    /// Build a waiter from the process-wide maximum wait.
    ///
    /// The setting is read once, here; later changes do not affect this
    /// waiter.
    pub fn from_process_default() -> Self {
        Self::new(WaitConfig::from_process_default())
    }

    /// Name the wait for log events and timeout errors.
    #[must_use]
    pub fn named(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Limits applied by this waiter.
    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    /// Label used in log events and errors.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Block until `operation` returns `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`Timeout`] if no value is produced before the deadline.
    pub fn until_some<T, F>(&self, mut operation: F) -> Result<T, Timeout>
    where
        F: FnMut() -> Option<T>,
    {
        self.try_until_some(|| Ok::<_, Infallible>(operation()))
            .map_err(Timeout::from)
    }

    /// Block until `operation` returns `Ok(Some(_))`.
    ///
    /// An `Err` from the operation ends the wait on that attempt.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::Operation`] with the operation's error, or
    /// [`WaitError::Timeout`] if the deadline passes first.
    pub fn try_until_some<T, E, F>(&self, mut operation: F) -> Result<T, WaitError<E>>
    where
        F: FnMut() -> Result<Option<T>, E>,
    {
        let mut tracker = Tracker::start(&self.config, Instant::now());
        loop {
            let outcome = operation();
            if let Some(done) = self.settle(&mut tracker, outcome, Instant::now()) {
                return done;
            }
            let now = Instant::now();
            let Some(delay) = tracker.next_delay(now) else {
                return Err(self.expire(&tracker, now).into());
            };
            thread::sleep(delay);
            let now = Instant::now();
            if tracker.expired(now) {
                return Err(self.expire(&tracker, now).into());
            }
        }
    }

    /// Block until `condition` returns `true`.
    ///
    /// # Errors
    ///
    /// Returns [`Timeout`] if the condition never holds before the deadline.
    pub fn until_true<F>(&self, mut condition: F) -> Result<(), Timeout>
    where
        F: FnMut() -> bool,
    {
        self.until_some(|| condition().then_some(()))
    }

    /// Record one attempt and decide whether the wait is over.
    fn settle<T, E>(
        &self,
        tracker: &mut Tracker,
        outcome: Result<Option<T>, E>,
        now: Instant,
    ) -> Option<Result<T, WaitError<E>>> {
        let attempt = tracker.record_attempt();
        match outcome {
            Ok(Some(value)) => {
                debug!(
                    wait = %self.label,
                    attempts = attempt,
                    elapsed = ?tracker.elapsed(now),
                    "value ready"
                );
                Some(Ok(value))
            }
            Ok(None) => {
                trace!(wait = %self.label, attempt, "no value yet");
                None
            }
            Err(e) => {
                warn!(wait = %self.label, attempt, "operation failed; abandoning wait");
                Some(Err(WaitError::Operation(e)))
            }
        }
    }

    fn expire(&self, tracker: &Tracker, now: Instant) -> Timeout {
        let timeout = tracker.timeout(&self.label, now);
        warn!(
            wait = %self.label,
            attempts = tracker.attempts(),
            elapsed = ?timeout.elapsed,
            "timed out waiting for a value"
        );
        timeout
    }
}

/// Block until `operation` returns `Some`, using the process-wide maximum
/// wait from [`crate::settings`].
///
/// # Errors
///
/// Returns [`Timeout`] if no value is produced before the deadline.
///
/// # Examples
///
/// ```
/// let mut pending = vec![Some(7), None, None];
/// let value = waiter::wait_until_non_null(|| pending.pop().flatten()).expect("value");
/// assert_eq!(value, 7);
/// ```
pub fn wait_until_non_null<T, F>(operation: F) -> Result<T, Timeout>
where
    F: FnMut() -> Option<T>,
{
    Waiter::from_process_default().until_some(operation)
}

/// Fallible form of [`wait_until_non_null`].
///
/// # Errors
///
/// Returns the operation's error unchanged inside [`WaitError::Operation`],
/// or [`WaitError::Timeout`].
pub fn try_wait_until_non_null<T, E, F>(operation: F) -> Result<T, WaitError<E>>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    Waiter::from_process_default().try_until_some(operation)
}

/// Block until `condition` holds, using the process-wide maximum wait.
///
/// # Errors
///
/// Returns [`Timeout`] if the condition never holds before the deadline.
pub fn wait_until_true<F>(condition: F) -> Result<(), Timeout>
where
    F: FnMut() -> bool,
{
    Waiter::from_process_default().until_true(condition)
}
