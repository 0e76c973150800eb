//! Poll an operation until it produces a value.
//!
//! # Overview
//! This crate exposes:
//! - [`Waiter`]: a poller with explicit, immutable limits, offering blocking
//!   ([`Waiter::until_some`]) and async ([`Waiter::until_some_async`]) waits.
//! - [`wait_until_non_null`] and friends: shortcuts that read the
//!   process-wide maximum wait from [`settings`].
//! - [`WaitConfig`]: limits loadable from TOML with `WAITER_*` environment
//!   overrides.
//!
//! # Examples
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use waiter::{WaitConfig, Waiter};
//!
//! let started = AtomicBool::new(false);
//! std::thread::scope(|s| {
//!     s.spawn(|| started.store(true, Ordering::SeqCst));
//!     Waiter::new(WaitConfig::default().with_max_wait_secs(5))
//!         .named("worker start")
//!         .until_true(|| started.load(Ordering::SeqCst))
//!         .expect("worker should start");
//! });
//! ```

pub mod config;
pub mod error;
pub mod poll;
pub mod settings;

pub use config::{ConfigError, WaitConfig};
pub use error::{Timeout, WaitError};
pub use poll::{Waiter, try_wait_until_non_null, wait_until_non_null, wait_until_true};
