//! Process-wide default for the maximum wait duration.
//!
//! The free functions in [`crate::poll`] read this setting each time they
//! build a [`crate::Waiter`]. Changing it affects every later wait in the
//! process, so tests that mutate it should run serially.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default maximum wait in seconds.
///
/// Long enough for slow CI machines while still failing a hung test within
/// a minute.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 60;

/// Delay observed between successive attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

static MAX_WAIT_SECS: AtomicU64 = AtomicU64::new(DEFAULT_MAX_WAIT_SECS);

/// Current process-wide maximum wait in seconds.
pub fn max_wait_secs() -> u64 {
    MAX_WAIT_SECS.load(Ordering::Relaxed)
}

/// Current process-wide maximum wait as a [`Duration`].
pub fn max_wait() -> Duration {
    Duration::from_secs(max_wait_secs())
}

/// Replace the process-wide maximum wait.
///
/// Waits that have already started keep the deadline they computed.
///
/// # Examples
///
/// ```
/// waiter::settings::set_max_wait_secs(5);
/// assert_eq!(waiter::settings::max_wait_secs(), 5);
/// waiter::settings::reset();
/// ```
pub fn set_max_wait_secs(secs: u64) {
    MAX_WAIT_SECS.store(secs, Ordering::Relaxed);
}

/// Restore [`DEFAULT_MAX_WAIT_SECS`].
pub fn reset() {
    set_max_wait_secs(DEFAULT_MAX_WAIT_SECS);
}
