//! Async waits that yield to the tokio scheduler between attempts.
//!
//! Time is read from `tokio::time`, so these waits honour a paused test
//! clock.

use std::convert::Infallible;
use std::future::Future;
use std::time::Instant;
use tokio::time::sleep;

use super::{Tracker, Waiter};
use crate::error::{Timeout, WaitError};

fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

impl Waiter {
    /// Wait until the future returned by `operation` resolves to `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`Timeout`] if no value is produced before the deadline.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// use waiter::{WaitConfig, Waiter};
    ///
    /// let waiter = Waiter::new(WaitConfig::default().with_poll_interval_ms(1));
    /// let value = waiter
    ///     .until_some_async(|| async { Some(42) })
    ///     .await
    ///     .expect("value");
    /// assert_eq!(value, 42);
    /// # }
    /// ```
    pub async fn until_some_async<T, F, Fut>(&self, mut operation: F) -> Result<T, Timeout>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        self.try_until_some_async(|| {
            let attempt = operation();
            async move { Ok::<_, Infallible>(attempt.await) }
        })
        .await
        .map_err(Timeout::from)
    }

    /// Wait until the future returned by `operation` resolves to
    /// `Ok(Some(_))`.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::Operation`] with the operation's error, or
    /// [`WaitError::Timeout`] if the deadline passes first.
    pub async fn try_until_some_async<T, E, F, Fut>(
        &self,
        mut operation: F,
    ) -> Result<T, WaitError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        let mut tracker = Tracker::start(&self.config, now());
        loop {
            let outcome = operation().await;
            if let Some(done) = self.settle(&mut tracker, outcome, now()) {
                return done;
            }
            let current = now();
            let Some(delay) = tracker.next_delay(current) else {
                return Err(self.expire(&tracker, current).into());
            };
            sleep(delay).await;
            let current = now();
            if tracker.expired(current) {
                return Err(self.expire(&tracker, current).into());
            }
        }
    }

    /// Wait until the future returned by `condition` resolves to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`Timeout`] if the condition never holds before the deadline.
    pub async fn until_true_async<F, Fut>(&self, mut condition: F) -> Result<(), Timeout>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        self.until_some_async(|| {
            let check = condition();
            async move { check.await.then_some(()) }
        })
        .await
    }
}
