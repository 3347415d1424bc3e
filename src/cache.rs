//! The main cache interface.
//!
//! This module provides the `Cache` type that users interact with. It turns
//! every key into its canonical string and hands it to the internal storage.

use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::key::CacheKey;
use crate::stats::CacheStats;
use crate::storage::Store;

/// A bounded LRU cache whose entries can expire after a maximum age.
///
/// # Features
/// - **LRU eviction**: When `max_size` entries are resident, inserting a new
///   key evicts the least recently used one.
/// - **Max age**: Entries older than `max_age` are treated as absent and
///   dropped the next time they are fetched.
/// - **Any key shape**: Keys are reduced to canonical strings, see
///   [`CacheKey`](crate::CacheKey).
/// - **Statistics**: Track hits, misses, evictions, and more.
///
/// Every mutating operation takes `&mut self`. Wrap the cache in a lock if it
/// has to be shared between threads.
///
/// # Example
/// ```
/// use lru_ttl_cache::{Cache, CacheConfig};
/// use std::time::Duration;
///
/// // Create a cache with max 1000 entries that go stale after 5 minutes
/// let config = CacheConfig::new()
///     .max_size(1000)
///     .max_age(Duration::from_secs(300))
///     .build()
///     .unwrap();
///
/// let mut cache = Cache::new(config);
///
/// cache.put("user:123", "Alice");
/// if let Some(value) = cache.fetch("user:123") {
///     println!("Found: {}", value);
/// }
///
/// println!("Hit rate: {:.1}%", cache.stats().hit_rate());
/// ```
pub struct Cache<V, C = SystemClock> {
    store: Store<V, C>,
}

impl<V> Cache<V> {
    /// Create a new cache with the given configuration, timed by the system
    /// clock.
    ///
    /// # Example
    /// ```
    /// use lru_ttl_cache::{Cache, CacheConfig};
    ///
    /// let cache: Cache<String> = Cache::new(CacheConfig::default());
    /// assert_eq!(cache.capacity(), 100);
    /// ```
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<V, C: Clock> Cache<V, C> {
    /// Create a new cache that reads time from `clock`.
    ///
    /// Pass a [`MockClock`](crate::MockClock) to control expiry in tests.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            store: Store::new(config, clock),
        }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key was never stored, was evicted, or has reached
    /// its max age. A stale entry is removed by this call. A hit makes the key
    /// the most recently used one; it does not reset its age.
    ///
    /// # Example
    /// ```
    /// use lru_ttl_cache::Cache;
    ///
    /// let mut cache = Cache::default();
    /// cache.put("key", 7);
    ///
    /// assert_eq!(cache.fetch("key"), Some(&7));
    /// assert_eq!(cache.fetch("missing"), None);
    /// ```
    pub fn fetch<K: CacheKey + ?Sized>(&mut self, key: &K) -> Option<&V> {
        self.store.fetch(&key.canonical_key())
    }

    /// Store a value in the cache.
    ///
    /// An existing entry for the key is updated in place and its age starts
    /// over. A new key may evict the least recently used entry.
    ///
    /// # Example
    /// ```
    /// use lru_ttl_cache::{Cache, CacheConfig};
    ///
    /// let mut cache = Cache::new(CacheConfig::new().max_size(2).build().unwrap());
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3); // evicts "a"
    ///
    /// assert_eq!(cache.fetch("a"), None);
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn put<K: CacheKey + ?Sized>(&mut self, key: &K, value: V) {
        self.store.put(&key.canonical_key(), value);
    }

    /// Get a value without marking it as used.
    ///
    /// Stale entries read as `None` but stay resident. Lookups made with
    /// `peek` are not counted in the statistics.
    pub fn peek<K: CacheKey + ?Sized>(&self, key: &K) -> Option<&V> {
        self.store.peek(&key.canonical_key())
    }

    /// Check if a fresh entry exists for `key`.
    ///
    /// Like [`peek`](Self::peek), this does NOT update recency.
    pub fn contains<K: CacheKey + ?Sized>(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }

    /// Remove a key from the cache, returning its value even if stale.
    ///
    /// # Example
    /// ```
    /// use lru_ttl_cache::Cache;
    ///
    /// let mut cache = Cache::default();
    /// cache.put("key", "value");
    /// assert_eq!(cache.remove("key"), Some("value"));
    /// assert_eq!(cache.remove("key"), None); // Already removed
    /// ```
    pub fn remove<K: CacheKey + ?Sized>(&mut self, key: &K) -> Option<V> {
        self.store.remove(&key.canonical_key())
    }

    /// Remove every entry that has reached its max age.
    ///
    /// Returns the number of entries that were removed. Expiry is otherwise
    /// lazy, so this is the way to reclaim entries that are never fetched
    /// again.
    pub fn purge_expired(&mut self) -> usize {
        self.store.purge_expired()
    }

    /// Remove all entries. Statistics are kept.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Get the number of resident entries.
    ///
    /// Note: This may include stale entries that have not been fetched or
    /// purged yet.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.store.config().max_size()
    }

    /// The configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        self.store.config()
    }

    /// Iterate over `(canonical key, value)` pairs, most recently used first.
    ///
    /// Does not change recency. Stale entries that nobody has fetched yet
    /// are included.
    ///
    /// # Example
    /// ```
    /// use lru_ttl_cache::Cache;
    ///
    /// let mut cache = Cache::default();
    /// cache.put("a", 1);
    /// cache.put(&2u8, 2);
    ///
    /// let keys: Vec<&str> = cache.iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, ["2", "a"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.store.iter()
    }

    /// Get the operation counters.
    pub fn stats(&self) -> &CacheStats {
        self.store.stats()
    }

    /// Reset all operation counters to zero.
    pub fn reset_stats(&mut self) {
        self.store.reset_stats();
    }
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<V, C> fmt::Debug for Cache<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("config", self.store.config())
            .field("len", &self.store.len())
            .field("stats", self.store.stats())
            .finish()
    }
}
