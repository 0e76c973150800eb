//! Error types returned by waits.

use std::borrow::Cow;
use std::convert::Infallible;
use std::time::Duration;
use thiserror::Error;

/// The operation was not ready before the deadline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{label} was not ready within {max_wait:?} \
     ({attempts} attempts over {elapsed:?}, polling every {poll_interval:?})"
)]
pub struct Timeout {
    /// Label of the wait that expired.
    pub label: Cow<'static, str>,
    /// Time spent waiting, measured when the deadline was detected.
    pub elapsed: Duration,
    /// Configured maximum wait.
    pub max_wait: Duration,
    /// Delay between attempts.
    pub poll_interval: Duration,
    /// Number of times the operation was invoked.
    pub attempts: u32,
}

/// Errors returned by fallible waits.
///
/// `E` is the operation's own error type. Infallible waits use the default
/// and can only time out.
#[derive(Debug, Error)]
pub enum WaitError<E = Infallible> {
    /// No value was produced in time.
    #[error(transparent)]
    Timeout(#[from] Timeout),
    /// The operation failed; the wait was abandoned on that attempt.
    #[error("operation failed: {0}")]
    Operation(#[source] E),
}

impl<E> WaitError<E> {
    /// Return the timeout details, if this is a timeout.
    pub fn as_timeout(&self) -> Option<&Timeout> {
        match self {
            Self::Timeout(t) => Some(t),
            Self::Operation(_) => None,
        }
    }

    /// Take the operation's error, if the wait ended because the operation
    /// failed.
    pub fn into_operation(self) -> Option<E> {
        match self {
            Self::Operation(e) => Some(e),
            Self::Timeout(_) => None,
        }
    }
}

impl From<WaitError<Infallible>> for Timeout {
    fn from(value: WaitError<Infallible>) -> Self {
        match value {
            WaitError::Timeout(t) => t,
            WaitError::Operation(never) => match never {},
        }
    }
}
