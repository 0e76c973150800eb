//! Test support utilities.
//!
//! Scripted operations for driving waits, a guard for `WAITER_*`
//! environment overrides and an in-memory log capture.

pub mod env_guard;
pub mod logging;
pub mod operation;

pub use env_guard::EnvGuard;
pub use logging::LogCapture;
pub use operation::{Countdown, ScriptedFailure};
