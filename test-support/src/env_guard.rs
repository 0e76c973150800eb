//! Scoped environment overrides.
//!
//! `EnvGuard` sets or removes any number of variables and restores every
//! original value, in reverse order, when dropped. Tests using it must run
//! serially because the process environment is shared.

#[derive(Debug, Default)]
#[must_use = "the environment is restored when the guard is dropped"]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Start an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` until the guard is dropped.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.save(key);
        set_env_var(key, value);
        self
    }

    /// Unset `key` until the guard is dropped.
    pub fn remove(mut self, key: &str) -> Self {
        self.save(key);
        remove_env_var(key);
        self
    }

    fn save(&mut self, key: &str) {
        self.saved.push((key.to_owned(), std::env::var(key).ok()));
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            match original {
                Some(v) => set_env_var(&key, &v),
                None => remove_env_var(&key),
            }
        }
    }
}

/// SAFETY: callers run in serial test contexts.
fn set_env_var(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

/// SAFETY: callers run in serial test contexts.
fn remove_env_var(key: &str) {
    unsafe { std::env::remove_var(key) };
}
