//! A resident cache entry.

use std::time::{Duration, Instant};

use crate::list::EntryId;

/// A key/value pair stamped with the time it was last written.
///
/// `prev` and `next` are handles into the recency list's slot pool and are
/// only meaningful while the entry is linked.
#[derive(Debug)]
pub struct Entry<V> {
    /// Canonical key this entry is indexed under.
    pub(crate) key: String,

    pub(crate) value: V,

    /// When the value was last written, either by insertion or by `update`.
    pub(crate) last_updated: Instant,

    /// Neighbour closer to the head (more recently used).
    pub(crate) prev: Option<EntryId>,

    /// Neighbour closer to the tail (less recently used).
    pub(crate) next: Option<EntryId>,
}

impl<V> Entry<V> {
    /// Create an unlinked entry written at `now`.
    pub fn new(key: String, value: V, now: Instant) -> Self {
        Self {
            key,
            value,
            last_updated: now,
            prev: None,
            next: None,
        }
    }

    /// Replace the value and restart the entry's age from `now`.
    pub fn update(&mut self, value: V, now: Instant) {
        self.value = value;
        self.last_updated = now;
    }

    /// Time elapsed since the last write. Zero if `now` is earlier.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_updated)
    }

    /// Whether the entry has reached `max_age` at `now`.
    ///
    /// An entry exactly `max_age` old is already stale.
    pub fn is_stale(&self, now: Instant, max_age: Option<Duration>) -> bool {
        match max_age {
            Some(max_age) => self.age(now) >= max_age,
            None => false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}
