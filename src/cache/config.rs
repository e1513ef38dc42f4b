//! Cache configuration options

use std::time::Duration;

/// Configuration for surface result caching
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Whether result caching is enabled
    pub enable_result_caching: bool,

    /// Time-to-live for cached grids; entries expire this long after
    /// creation. `None` means entries never go stale.
    pub cache_ttl: Option<Duration>,
}

impl CacheConfig {
    /// Create a configuration with custom settings
    pub fn new(enable_result_caching: bool, cache_ttl: Option<Duration>) -> Self {
        Self {
            enable_result_caching,
            cache_ttl,
        }
    }

    /// Expiry-free profile: entries stay fresh until superseded
    pub fn unbounded() -> Self {
        Self {
            enable_result_caching: true,
            cache_ttl: None,
        }
    }

    /// Caching disabled: every request recomputes
    pub fn disabled() -> Self {
        Self {
            enable_result_caching: false,
            cache_ttl: None,
        }
    }

    /// Very short TTL for exercising expiry in tests
    pub fn testing() -> Self {
        Self {
            enable_result_caching: true,
            cache_ttl: Some(Duration::from_millis(100)),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enable_result_caching: true,
            // The expiry window for memoized grids
            cache_ttl: Some(Duration::from_secs(300)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_five_minute_ttl() {
        let config = CacheConfig::default();
        assert!(config.enable_result_caching);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(300)));
    }

    #[test]
    fn disabled_profile() {
        let config = CacheConfig::disabled();
        assert!(!config.enable_result_caching);
        assert_eq!(config.cache_ttl, None);
    }

    #[test]
    fn testing_profile_expires_quickly() {
        let config = CacheConfig::testing();
        assert!(config.enable_result_caching);
        assert_eq!(config.cache_ttl, Some(Duration::from_millis(100)));
    }
}
