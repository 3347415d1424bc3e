//! # LRU TTL Cache
//!
//! A bounded, in-process key-value cache that evicts the least recently used
//! entry when full and treats entries older than a configured age as absent.
//!
//! ## Features
//!
//! - **LRU eviction**: O(1) lookups and updates over a slot pool with a
//!   doubly linked recency list
//! - **Max age**: Lazy expiry on access, plus an explicit `purge_expired` sweep
//! - **Flexible keys**: Strings, numbers and any `Serialize` value through
//!   [`StructuredKey`]
//! - **Testable time**: Swap in a [`MockClock`] to drive expiry
//! - **Zero unsafe code**: Built entirely with safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use lru_ttl_cache::{Cache, CacheConfig};
//! use std::time::Duration;
//!
//! let config = CacheConfig::new()
//!     .max_size(2)
//!     .max_age(Duration::from_secs(300))
//!     .build()
//!     .unwrap();
//!
//! let mut cache = Cache::new(config);
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! let _ = cache.fetch("a"); // "a" is now most recently used
//! cache.put("c", 3);        // evicts "b"
//!
//! assert_eq!(cache.fetch("b"), None);
//! assert_eq!(cache.fetch("a"), Some(&1));
//! assert_eq!(cache.fetch("c"), Some(&3));
//! ```
//!
//! ## Configuration
//!
//! Besides the builder, a configuration can be read from a JSON object or
//! from the environment:
//!
//! ```rust
//! use lru_ttl_cache::CacheConfig;
//!
//! let config = CacheConfig::from_json(r#"{"maxSize": 500, "maxAgeSeconds": 30}"#).unwrap();
//! assert_eq!(config.max_size(), 500);
//! ```
//!
//! ## Threading
//!
//! The cache is a plain single-owner data structure. All mutation goes
//! through `&mut self`; share it across threads behind a `Mutex` if needed.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod key;
pub mod stats;

pub use cache::Cache;
pub use clock::{Clock, MockClock, SystemClock};
pub use config::{CacheConfig, CacheConfigBuilder};
pub use error::{CacheError, CacheResult};
pub use key::{CacheKey, StructuredKey};
pub use stats::CacheStats;

// Internal modules - not part of public API
pub(crate) mod entry;
pub(crate) mod list;
pub(crate) mod storage;
