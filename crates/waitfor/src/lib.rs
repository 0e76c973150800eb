//! Library utilities for the `waitfor` CLI.
//!
//! Limits come from, in increasing precedence: built-in defaults, an
//! optional TOML file, `WAITER_*` environment variables and command-line
//! flags.

use clap::Parser;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use tracing::info;
use waiter::{ConfigError, WaitConfig, WaitError, Waiter};

pub mod logging;
pub mod target;

pub use target::Target;

/// Command line arguments for `waitfor`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waitfor",
    about = "Wait until a path appears or a command prints output"
)]
pub struct Args {
    /// TOML file providing `max_wait_secs` and `poll_interval_ms`.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Give up after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub max_wait_secs: Option<u64>,

    /// Delay between attempts in milliseconds.
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Print the result as a JSON object instead of the bare value.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub target: Target,
}

impl Args {
    /// Resolve the limits for this invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration file is missing or any
    /// source is malformed.
    pub fn wait_config(&self) -> Result<WaitConfig, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => WaitConfig::from_file(path)?,
            None => WaitConfig::from_env()?,
        };
        if let Some(secs) = self.max_wait_secs {
            cfg = cfg.with_max_wait_secs(secs);
        }
        if let Some(ms) = self.poll_interval_ms {
            cfg = cfg.with_poll_interval_ms(ms);
        }
        Ok(cfg)
    }
}

/// Errors that end a `waitfor` run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Limits could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The target timed out or its probe failed.
    #[error(transparent)]
    Wait(#[from] WaitError<io::Error>),
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Description of the awaited target.
    pub target: String,
    /// Value produced by the target.
    pub value: String,
    /// Milliseconds spent waiting.
    pub elapsed_ms: u64,
}

impl Outcome {
    /// Format the outcome for stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        if json {
            serde_json::to_string(self)
        } else {
            Ok(self.value.clone())
        }
    }
}

/// Wait for the target described by `args`.
///
/// # Examples
///
/// ```no_run
/// # use clap::Parser;
/// # async fn try_run() -> Result<(), waitfor::CliError> {
/// let args = waitfor::Args::parse_from(["waitfor", "path", "/run/app.sock"]);
/// let outcome = waitfor::run(&args).await?;
/// println!("{}", outcome.value);
/// # Ok(())
/// # }
/// ```
pub async fn run(args: &Args) -> Result<Outcome, CliError> {
    let config = args.wait_config()?;
    let waiter = Waiter::new(config).named(args.target.describe());
    let started = Instant::now();
    let value = args.target.wait(&waiter).await?;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(wait = waiter.label(), elapsed_ms, "target ready");
    Ok(Outcome {
        target: waiter.label().to_owned(),
        value,
        elapsed_ms,
    })
}
