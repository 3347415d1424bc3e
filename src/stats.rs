//! Statistics for the cache.
//!
//! The cache is owned by a single caller, so the counters are plain integers
//! updated through `&mut self`.

/// Counters for cache operations.
///
/// Use `Cache::stats()` to read them.
///
/// # Example
/// ```
/// use lru_ttl_cache::Cache;
///
/// let mut cache = Cache::default();
/// cache.put("key", "value");
/// let _ = cache.fetch("key");
/// let _ = cache.fetch("missing");
///
/// let stats = cache.stats();
/// assert_eq!(stats.hits(), 1);
/// assert_eq!(stats.misses(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// `fetch` calls that returned a value.
    hits: u64,

    /// `fetch` calls that found nothing, or only a stale entry.
    misses: u64,

    /// `put` calls that created a new entry.
    inserts: u64,

    /// `put` calls that overwrote an existing entry.
    updates: u64,

    /// Entries dropped to stay within capacity.
    evictions: u64,

    /// Entries dropped because they exceeded the max age.
    expirations: u64,

    /// Entries dropped by an explicit `remove`.
    removals: u64,
}

impl CacheStats {
    /// Create a new stats instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub(crate) fn record_removal(&mut self) {
        self.removals += 1;
    }

    // Getters for reading statistics

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    pub fn expirations(&self) -> u64 {
        self.expirations
    }

    pub fn removals(&self) -> u64 {
        self.removals
    }

    /// Total number of `fetch` calls.
    pub fn total_lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate the hit rate as a percentage (0.0 to 100.0).
    /// Returns 0.0 if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_lookups();
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}
