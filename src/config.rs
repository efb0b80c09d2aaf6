//! Environment-driven defaults.

use std::time::Duration;

pub const DEFAULT_LENGTH: usize = 12;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

pub const LENGTH_ENV: &str = "PWD_GEN_DEFAULT_LENGTH";
pub const DEBOUNCE_ENV: &str = "PWD_GEN_DEBOUNCE_MS";

/// Returns the password length a fresh request starts with.
///
/// Priority:
/// 1. Environment variable `PWD_GEN_DEFAULT_LENGTH` (positive integer)
/// 2. [`DEFAULT_LENGTH`]
pub fn default_length() -> usize {
    read_env(LENGTH_ENV)
        .filter(|&len: &usize| len > 0)
        .unwrap_or(DEFAULT_LENGTH)
}

/// Returns the delay applied before an async request is generated.
///
/// Priority:
/// 1. Environment variable `PWD_GEN_DEBOUNCE_MS`
/// 2. [`DEFAULT_DEBOUNCE_MS`]
pub fn debounce() -> Duration {
    Duration::from_millis(read_env(DEBOUNCE_ENV).unwrap_or(DEFAULT_DEBOUNCE_MS))
}

fn read_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring malformed {}={:?}", key, raw);
            None
        }
    }
}
