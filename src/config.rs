//! Configuration for the cache.
//!
//! This module provides a builder for the two knobs the cache has: how many
//! entries it holds and how long an entry stays fresh. Values are validated
//! once, when the configuration is built.

use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::{CacheError, CacheResult};

/// Capacity used when none is configured.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Environment variable read by [`CacheConfig::from_env`] for the capacity.
pub const ENV_MAX_SIZE: &str = "LRU_CACHE_MAX_SIZE";

/// Environment variable read by [`CacheConfig::from_env`] for the max age.
pub const ENV_MAX_AGE_SECS: &str = "LRU_CACHE_MAX_AGE_SECS";

/// Validated configuration for a cache instance.
///
/// Use the builder to construct one:
///
/// ```
/// use lru_ttl_cache::CacheConfig;
/// use std::time::Duration;
///
/// let config = CacheConfig::new()
///     .max_size(10_000)
///     .max_age(Duration::from_secs(300))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_size(), 10_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Maximum number of resident entries. Always at least 1.
    max_size: usize,

    /// Age at which an entry is treated as absent. `None` means unbounded.
    max_age: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            max_age: None,
        }
    }
}

impl CacheConfig {
    /// Start building a configuration from the defaults.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Parse a JSON configuration object such as
    /// `{"maxSize": 500, "maxAgeSeconds": 30}`.
    ///
    /// Both fields are optional and unknown fields are ignored.
    pub fn from_json(json: &str) -> CacheResult<Self> {
        let builder: CacheConfigBuilder =
            serde_json::from_str(json).map_err(CacheError::ConfigParse)?;
        builder.build()
    }

    /// Build a configuration from `LRU_CACHE_MAX_SIZE` and
    /// `LRU_CACHE_MAX_AGE_SECS`. Unset variables fall back to the defaults.
    pub fn from_env() -> CacheResult<Self> {
        let mut builder = CacheConfigBuilder::default();

        if let Ok(raw) = env::var(ENV_MAX_SIZE) {
            let size = raw.trim().parse::<usize>().map_err(|_| {
                CacheError::InvalidConfig(format!("{} is not a size: '{}'", ENV_MAX_SIZE, raw))
            })?;
            builder = builder.max_size(size);
        }

        if let Ok(raw) = env::var(ENV_MAX_AGE_SECS) {
            let secs = raw.trim().parse::<f64>().map_err(|_| {
                CacheError::InvalidConfig(format!(
                    "{} is not a number of seconds: '{}'",
                    ENV_MAX_AGE_SECS, raw
                ))
            })?;
            builder = builder.max_age_secs(secs);
        }

        builder.build()
    }

    /// Maximum number of entries held before the least recently used one is
    /// evicted.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Maximum age of an entry, if bounded.
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }
}

/// Builder for [`CacheConfig`].
///
/// Also the deserialization target for JSON configuration objects, which use
/// the camelCase names `maxSize` and `maxAgeSeconds`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfigBuilder {
    max_size: Option<usize>,

    #[serde(rename = "maxAgeSeconds")]
    max_age_secs: Option<f64>,
}

impl CacheConfigBuilder {
    /// Set the maximum number of entries. Must be positive.
    pub fn max_size(mut self, size: usize) -> Self {
        self.max_size = Some(size);
        self
    }

    /// Set the maximum age of an entry. Must be non-zero.
    pub fn max_age(mut self, age: Duration) -> Self {
        self.max_age_secs = Some(age.as_secs_f64());
        self
    }

    /// Set the maximum age in (possibly fractional) seconds.
    ///
    /// Must be positive. `f64::INFINITY` means entries never go stale.
    pub fn max_age_secs(mut self, secs: f64) -> Self {
        self.max_age_secs = Some(secs);
        self
    }

    /// Validate and produce the final configuration.
    ///
    /// A zero capacity is rejected rather than turned into a cache that
    /// misses on every lookup.
    pub fn build(self) -> CacheResult<CacheConfig> {
        let max_size = self.max_size.unwrap_or(DEFAULT_MAX_SIZE);
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }

        let max_age = match self.max_age_secs {
            None => None,
            Some(secs) if secs.is_nan() || secs <= 0.0 => {
                return Err(CacheError::InvalidConfig(format!(
                    "max_age must be a positive number of seconds, got {}",
                    secs
                )));
            }
            Some(secs) if secs.is_infinite() => None,
            Some(secs) => {
                let age = Duration::try_from_secs_f64(secs).map_err(|err| {
                    CacheError::InvalidConfig(format!("max_age out of range: {}", err))
                })?;
                // Sub-nanosecond values round down to zero.
                if age.is_zero() {
                    return Err(CacheError::InvalidConfig(format!(
                        "max_age must be at least 1ns, got {} seconds",
                        secs
                    )));
                }
                Some(age)
            }
        };

        Ok(CacheConfig {
            max_size,
            max_age,
        })
    }
}
