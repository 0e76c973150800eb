//! Step definitions for the behavioural suite.

mod cli_steps;
mod config_steps;
mod wait_steps;

pub use cli_steps::CliWorld;
pub use config_steps::ConfigWorld;
pub use wait_steps::WaitWorld;
