//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL applied to writes that carry none. `None` = entries never expire
    pub default_ttl: Option<Duration>,
    /// Maximum key length in bytes accepted by the memory store
    pub max_key_length: usize,
    /// Maximum encoded value size in bytes accepted by the memory store
    pub max_value_size: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: unset, 0 also means unset)
    /// - `CACHE_MAX_KEY_LENGTH` - Maximum key length (default: 256)
    /// - `CACHE_MAX_VALUE_SIZE` - Maximum value size in bytes (default: 1 MB)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("CACHE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            max_key_length: env::var("CACHE_MAX_KEY_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_KEY_LENGTH),
            max_value_size: env::var("CACHE_MAX_VALUE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_VALUE_SIZE),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: None,
            max_key_length: MAX_KEY_LENGTH,
            max_value_size: MAX_VALUE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl, None);
        assert_eq!(config.max_key_length, 256);
        assert_eq!(config.max_value_size, 1024 * 1024);
    }

    // Both env scenarios live in one test so parallel tests never race on the variables.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_MAX_KEY_LENGTH");
        env::remove_var("CACHE_MAX_VALUE_SIZE");

        assert_eq!(CacheConfig::from_env(), CacheConfig::default());

        env::set_var("CACHE_DEFAULT_TTL", "30");
        env::set_var("CACHE_MAX_KEY_LENGTH", "not-a-number");
        env::set_var("CACHE_MAX_VALUE_SIZE", "4096");

        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl, Some(Duration::from_secs(30)));
        assert_eq!(config.max_key_length, MAX_KEY_LENGTH);
        assert_eq!(config.max_value_size, 4096);

        env::set_var("CACHE_DEFAULT_TTL", "0");
        assert_eq!(CacheConfig::from_env().default_ttl, None);

        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_MAX_KEY_LENGTH");
        env::remove_var("CACHE_MAX_VALUE_SIZE");
    }
}
