//! Helpers for tests that touch process environment (`ADS4GPTS_*`).

use crate::config::{ENV_API_KEY, ENV_BASE_URL};

/// Restores an environment variable to its prior value on drop.
///
/// Pair with `#[serial(env)]`: `set_var`/`remove_var` race with concurrent readers.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set `key` to `val` until the guard drops.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env mutation with `#[serial(env)]`.
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Unset `key` until the guard drops.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env mutation with `#[serial(env)]`.
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: still inside the serialized test that created the guard.
        match self.prev.take() {
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// Pins both `ADS4GPTS_*` variables for the duration of a test.
///
/// Restores whatever the developer's shell had set once dropped.
pub struct AdsEnv {
    _key: EnvGuard,
    _base: EnvGuard,
}

impl AdsEnv {
    /// Neither a key nor a base URL in the environment.
    #[must_use]
    pub fn clean() -> Self {
        Self {
            _key: EnvGuard::remove(ENV_API_KEY),
            _base: EnvGuard::remove(ENV_BASE_URL),
        }
    }

    /// Only `ADS4GPTS_API_KEY`, set to `key`; the base URL falls back to the default.
    #[must_use]
    pub fn with_key(key: &str) -> Self {
        Self {
            _key: EnvGuard::set(ENV_API_KEY, key),
            _base: EnvGuard::remove(ENV_BASE_URL),
        }
    }

    /// Both variables set.
    #[must_use]
    pub fn with_key_and_base(key: &str, base: &str) -> Self {
        Self {
            _key: EnvGuard::set(ENV_API_KEY, key),
            _base: EnvGuard::set(ENV_BASE_URL, base),
        }
    }
}
