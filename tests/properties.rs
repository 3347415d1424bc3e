//! Property-based tests checking the cache against a naive LRU model.

use lru_ttl_cache::{Cache, CacheConfig};
use proptest::prelude::*;

/// Keys in MRU-first order, with values. Linear scans keep it obviously
/// correct.
#[derive(Debug)]
struct Model {
    max_size: usize,
    entries: Vec<(u8, u32)>,
}

impl Model {
    fn new(max_size: usize) -> Self {
        Self {
            max_size,
            entries: Vec::new(),
        }
    }

    fn fetch(&mut self, key: u8) -> Option<u32> {
        let pos = self.entries.iter().position(|&(k, _)| k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u8, value: u32) {
        if let Some(pos) = self.entries.iter().position(|&(k, _)| k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() >= self.max_size {
            self.entries.pop();
        }
        self.entries.insert(0, (key, value));
    }
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u32 },
    Fetch { key: u8 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (0u8..16, any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        (0u8..16).prop_map(|key| CacheOp::Fetch { key }),
    ]
}

fn cache(max_size: usize) -> Cache<u32> {
    Cache::new(CacheConfig::new().max_size(max_size).build().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every fetch agrees with the model and the MRU order matches.
    #[test]
    fn prop_matches_lru_model(
        max_size in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..100),
    ) {
        let mut cache = cache(max_size);
        let mut model = Model::new(max_size);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(&key, value);
                    model.put(key, value);
                }
                CacheOp::Fetch { key } => {
                    prop_assert_eq!(cache.fetch(&key).copied(), model.fetch(key));
                }
            }
            prop_assert!(cache.len() <= max_size);
        }

        let order: Vec<String> = cache.iter().map(|(key, _)| key.to_string()).collect();
        let expected: Vec<String> = model.entries.iter().map(|(key, _)| key.to_string()).collect();
        prop_assert_eq!(order, expected);
    }

    /// A put is immediately visible unless something evicted it.
    #[test]
    fn prop_put_then_fetch(key in "[a-z0-9:_]{1,24}", value in any::<u64>()) {
        let mut cache = Cache::default();
        cache.put(key.as_str(), value);
        prop_assert_eq!(cache.fetch(key.as_str()), Some(&value));
    }

    /// Repeated puts of one key never grow the cache.
    #[test]
    fn prop_overwrite_keeps_size(values in prop::collection::vec(any::<u32>(), 1..20)) {
        let mut cache = cache(4);
        cache.put("other", 0);

        for &value in &values {
            cache.put("k", value);
        }

        prop_assert_eq!(cache.len(), 2);
        prop_assert_eq!(cache.fetch("k").copied(), values.last().copied());
    }

    /// Filling past capacity keeps exactly the newest `max_size` keys.
    #[test]
    fn prop_evicts_oldest_first(max_size in 1usize..10, extra in 1usize..10) {
        let mut cache = cache(max_size);
        let total = max_size + extra;

        for i in 0..total {
            cache.put(&i, i as u32);
        }

        prop_assert_eq!(cache.len(), max_size);
        for i in 0..extra {
            prop_assert!(!cache.contains(&i));
        }
        for i in extra..total {
            prop_assert_eq!(cache.fetch(&i).copied(), Some(i as u32));
        }
        prop_assert_eq!(cache.stats().evictions(), extra as u64);
    }
}
