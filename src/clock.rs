//! Time sources used to stamp entries and measure their age.
//!
//! The cache never calls `Instant::now()` directly. It asks its [`Clock`],
//! which lets tests move time forward without sleeping.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// A monotonic source of the current time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The host's monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually driven clock for deterministic tests.
///
/// Clones share the same elapsed time, so a test can hand one clone to the
/// cache and keep another to call [`MockClock::advance`].
///
/// ```
/// use lru_ttl_cache::{Cache, CacheConfig, MockClock};
/// use std::time::Duration;
///
/// let clock = MockClock::new();
/// let config = CacheConfig::new().max_age_secs(1.0).build().unwrap();
/// let mut cache = Cache::with_clock(config, clock.clone());
///
/// cache.put("a", 1);
/// clock.advance(Duration::from_secs(2));
/// assert_eq!(cache.fetch("a"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    origin: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl MockClock {
    /// Create a clock frozen at the moment of the call.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward by `by`.
    ///
    /// Saturates at the latest instant the platform can represent instead of
    /// overflowing, so advancing by `Duration::MAX` is allowed.
    pub fn advance(&self, by: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(PoisonError::into_inner);
        let mut remaining = by;
        let mut step = by;
        while !remaining.is_zero() && !step.is_zero() {
            step = step.min(remaining);
            let next = elapsed
                .checked_add(step)
                .filter(|next| self.origin.checked_add(*next).is_some());
            match next {
                Some(next) => {
                    *elapsed = next;
                    remaining -= step;
                }
                None => step /= 2,
            }
        }
    }

    /// Total time this clock has been advanced since creation.
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        // `advance` keeps `origin + elapsed` representable.
        self.origin
            .checked_add(self.elapsed())
            .unwrap_or(self.origin)
    }
}
