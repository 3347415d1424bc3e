//! Internal storage implementation for the cache.
//!
//! This module couples an `IndexMap` from canonical key to [`EntryId`] with the
//! [`RecencyList`] that orders the same entries by use. The index decides
//! whether a key is present; the list decides which entry goes first when the
//! cache is full.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::config::CacheConfig;
use crate::entry::Entry;
use crate::list::{EntryId, RecencyList};
use crate::stats::CacheStats;

/// Preallocation ceiling for the slot pool and index.
const MAX_PREALLOCATED: usize = 1024;

/// Index plus recency list, keyed by canonical strings.
///
/// This is the internal implementation; users should use `Cache` instead.
#[derive(Debug)]
pub struct Store<V, C> {
    index: IndexMap<String, EntryId>,
    list: RecencyList<V>,
    config: CacheConfig,
    clock: C,
    stats: CacheStats,
}

impl<V, C: Clock> Store<V, C> {
    pub fn new(config: CacheConfig, clock: C) -> Self {
        let prealloc = config.max_size().min(MAX_PREALLOCATED);
        debug!(
            max_size = config.max_size(),
            max_age = ?config.max_age(),
            "creating cache"
        );
        Self {
            index: IndexMap::with_capacity(prealloc),
            list: RecencyList::with_capacity(prealloc),
            config,
            clock,
            stats: CacheStats::new(),
        }
    }

    /// Look up `key`, promoting it to most recently used.
    ///
    /// A stale entry is unlinked, dropped from the index and reported as a miss.
    pub fn fetch(&mut self, key: &str) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        self.list.detach(id);

        let now = self.clock.now();
        let max_age = self.config.max_age();
        let age = self.list.get(id).map(|entry| entry.age(now));
        let stale = match (age, max_age) {
            (None, _) => true,
            (Some(age), Some(max_age)) => age >= max_age,
            (Some(_), None) => false,
        };

        if stale {
            self.index.swap_remove(key);
            // Already unlinked above; the slot goes back to the pool.
            self.list.release(id);
            self.stats.record_expiration();
            self.stats.record_miss();
            trace!(key = key, age = ?age, "dropped stale entry");
            return None;
        }

        self.list.insert_at_head(id);
        self.stats.record_hit();
        self.list.get(id).map(Entry::value)
    }

    /// Look up `key` without touching recency or removing anything.
    pub fn peek(&self, key: &str) -> Option<&V> {
        let entry = self.index.get(key).and_then(|&id| self.list.get(id))?;
        if entry.is_stale(self.clock.now(), self.config.max_age()) {
            None
        } else {
            Some(entry.value())
        }
    }

    /// Insert or overwrite `key`, making it most recently used.
    ///
    /// Overwriting keeps the existing entry and refreshes its timestamp. A new
    /// key first evicts the least recently used entry if the cache is full.
    pub fn put(&mut self, key: &str, value: V) {
        let now = self.clock.now();

        if let Some(&id) = self.index.get(key) {
            if let Some(entry) = self.list.get_mut(id) {
                entry.update(value, now);
            }
            self.list.detach(id);
            self.list.insert_at_head(id);
            self.stats.record_update();
            return;
        }

        if self.index.len() >= self.config.max_size() {
            self.evict_lru();
        }

        let id = self.list.alloc(Entry::new(key.to_owned(), value, now));
        self.list.insert_at_head(id);
        self.index.insert(key.to_owned(), id);
        self.stats.record_insert();
    }

    /// Remove `key` whether fresh or stale, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let id = self.index.swap_remove(key)?;
        self.list.detach(id);
        let entry = self.list.release(id)?;
        self.stats.record_removal();
        Some(entry.into_value())
    }

    /// Drop every stale entry, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let max_age = match self.config.max_age() {
            Some(max_age) => max_age,
            None => return 0,
        };

        let now = self.clock.now();
        let stale: Vec<EntryId> = self
            .list
            .ids_from_tail()
            .filter(|&id| {
                self.list
                    .get(id)
                    .is_some_and(|entry| entry.is_stale(now, Some(max_age)))
            })
            .collect();

        for &id in &stale {
            self.list.detach(id);
            if let Some(entry) = self.list.release(id) {
                self.index.swap_remove(entry.key());
                self.stats.record_expiration();
            }
        }

        if !stale.is_empty() {
            debug!(removed = stale.len(), "purged stale entries");
        }
        stale.len()
    }

    /// Age of the entry under `key`, if resident.
    #[cfg(test)]
    pub fn age_of(&self, key: &str) -> Option<std::time::Duration> {
        let entry = self.index.get(key).and_then(|&id| self.list.get(id))?;
        Some(entry.age(self.clock.now()))
    }

    /// Evict the tail entry.
    fn evict_lru(&mut self) {
        let id = match self.list.tail() {
            Some(id) => id,
            None => return,
        };

        self.list.detach(id);
        if let Some(entry) = self.list.release(id) {
            self.index.swap_remove(entry.key());
            self.stats.record_eviction();
            trace!(key = entry.key(), "evicted least recently used entry");
        }
    }
}

impl<V, C> Store<V, C> {
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
    }

    /// Linked entries, most recently used first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.list.iter().map(|entry| (entry.key(), entry.value()))
    }
}
