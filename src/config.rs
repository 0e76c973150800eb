//! Per-call-site wait configuration.
//!
//! A [`WaitConfig`] is plain data: build one with the `with_*` methods or
//! load it from a TOML file. Values may be overridden by environment
//! variables using the `WAITER_` prefix.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::settings::{self, DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL};

/// Prefix for environment overrides, e.g. `WAITER_MAX_WAIT_SECS`.
pub const ENV_PREFIX: &str = "WAITER_";

/// Errors raised while loading a [`WaitConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The file or an environment override could not be parsed.
    #[error(transparent)]
    Invalid(#[from] Box<figment::Error>),
}

/// Limits applied to a single wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Maximum time to keep polling, in seconds.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
    /// Delay between attempts, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_max_wait_secs() -> u64 {
    DEFAULT_MAX_WAIT_SECS
}

fn default_poll_interval_ms() -> u64 {
    u64::try_from(DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(u64::MAX)
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            max_wait_secs: default_max_wait_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl WaitConfig {
    /// Snapshot the process-wide maximum wait with the default poll interval.
    pub fn from_process_default() -> Self {
        Self::default().with_max_wait_secs(settings::max_wait_secs())
    }

    /// Override the maximum wait (seconds) and return the updated
    /// configuration.
    #[must_use]
    pub fn with_max_wait_secs(mut self, secs: u64) -> Self {
        self.max_wait_secs = secs;
        self
    }

    /// Override the poll interval (milliseconds) and return the updated
    /// configuration.
    #[must_use]
    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Maximum wait as a [`Duration`].
    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }

    /// Poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Load defaults overlaid by `WAITER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::extract(Self::base())
    }

    /// Load the configuration from `path`, merging `WAITER_*` environment
    /// variables over file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if `path` does not exist and
    /// [`ConfigError::Invalid`] if the file or an override is malformed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use waiter::WaitConfig;
    ///
    /// let cfg = WaitConfig::from_file("waiter.toml".as_ref()).expect("valid config");
    /// println!("polling every {:?}", cfg.poll_interval());
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::extract(Self::base().merge(Toml::file(path)))
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn extract(fig: Figment) -> Result<Self, ConfigError> {
        fig.merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }
}
