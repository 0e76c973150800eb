//! Deadline bookkeeping shared by the blocking and async loops.
//!
//! The tracker never reads the clock itself; callers pass `now` so the
//! async loop can use tokio's (possibly paused) clock.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use crate::config::WaitConfig;
use crate::error::Timeout;

#[derive(Debug)]
pub(super) struct Tracker {
    started: Instant,
    /// `None` when `started + max_wait` overflows the clock.
    deadline: Option<Instant>,
    max_wait: Duration,
    poll_interval: Duration,
    attempts: u32,
}

impl Tracker {
    pub(super) fn start(config: &WaitConfig, now: Instant) -> Self {
        let max_wait = config.max_wait();
        Self {
            started: now,
            deadline: now.checked_add(max_wait),
            max_wait,
            poll_interval: config.poll_interval(),
            attempts: 0,
        }
    }

    pub(super) fn record_attempt(&mut self) -> u32 {
        self.attempts = self.attempts.saturating_add(1);
        self.attempts
    }

    pub(super) fn attempts(&self) -> u32 {
        self.attempts
    }

    pub(super) fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub(super) fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Delay before the next attempt, clipped to the time remaining.
    ///
    /// Returns `None` once the deadline has been reached.
    pub(super) fn next_delay(&self, now: Instant) -> Option<Duration> {
        let Some(deadline) = self.deadline else {
            return Some(self.poll_interval);
        };
        let remaining = deadline.saturating_duration_since(now);
        if remaining.is_zero() {
            None
        } else {
            Some(self.poll_interval.min(remaining))
        }
    }

    pub(super) fn timeout(&self, label: &Cow<'static, str>, now: Instant) -> Timeout {
        Timeout {
            label: label.clone(),
            elapsed: self.elapsed(now),
            max_wait: self.max_wait,
            poll_interval: self.poll_interval,
            attempts: self.attempts,
        }
    }
}
