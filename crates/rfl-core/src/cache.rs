//! # Ring Caches
//!
//! Memoization for bag-to-ring derivation. A cache is an explicit object
//! handed to a [`RingEngine`](crate::RingEngine), so tests can run with a
//! fresh cache and separate engines never share state by accident.
//!
//! Derivation is pure, so a cache can only save work. Two threads that miss
//! on the same bag both compute the same spec and both insert it; the second
//! insert is a no-op in effect.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use crate::identity::BagId;
use crate::spec::RingSpec;

/// Storage for derived ring specs keyed by bag id.
pub trait RingCache: Send + Sync {
    /// Look up a previously derived spec.
    fn get(&self, bag: BagId) -> Option<RingSpec>;

    /// Record a derived spec. Implementations may drop the entry.
    fn insert(&self, bag: BagId, spec: RingSpec);

    /// Number of cached entries.
    fn len(&self) -> usize;

    /// Whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A cache that stores nothing. Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl RingCache for NoCache {
    fn get(&self, _bag: BagId) -> Option<RingSpec> {
        None
    }

    fn insert(&self, _bag: BagId, _spec: RingSpec) {}

    fn len(&self) -> usize {
        0
    }
}

/// Concurrent in-memory cache, optionally bounded.
///
/// When bounded, inserts past the limit are dropped rather than evicting
/// older entries. Bag ids come from a small fixed range, so the bound is a
/// memory ceiling, not a working-set policy.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<BagId, RingSpec>,
    limit: Option<usize>,
    // Slots claimed by bounded inserts; never below `entries.len()`.
    reserved: AtomicUsize,
}

impl MemoryCache {
    /// An unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that holds at most `limit` entries.
    pub fn bounded(limit: usize) -> Self {
        Self {
            entries: DashMap::new(),
            limit: Some(limit),
            reserved: AtomicUsize::new(0),
        }
    }

    /// The entry limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        let keys: Vec<BagId> = self.entries.iter().map(|e| *e.key()).collect();
        for key in keys {
            if self.entries.remove(&key).is_some() && self.limit.is_some() {
                self.reserved.fetch_sub(1, Ordering::AcqRel);
            }
        }
    }

    /// Claim a slot for a new key, `false` when the cache is full.
    fn reserve(&self, limit: usize) -> bool {
        self.reserved
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < limit).then_some(n + 1)
            })
            .is_ok()
    }
}

impl RingCache for MemoryCache {
    fn get(&self, bag: BagId) -> Option<RingSpec> {
        self.entries.get(&bag).map(|entry| *entry.value())
    }

    fn insert(&self, bag: BagId, spec: RingSpec) {
        let Some(limit) = self.limit else {
            self.entries.insert(bag, spec);
            return;
        };
        if let Some(mut existing) = self.entries.get_mut(&bag) {
            *existing = spec;
            return;
        }
        if !self.reserve(limit) {
            tracing::trace!(bag = bag.get(), limit, "ring cache full; dropping entry");
            return;
        }
        // Another thread may have stored the same bag since the lookup.
        if self.entries.insert(bag, spec).is_some() {
            self.reserved.fetch_sub(1, Ordering::AcqRel);
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<C: RingCache + ?Sized> RingCache for Arc<C> {
    fn get(&self, bag: BagId) -> Option<RingSpec> {
        (**self).get(bag)
    }

    fn insert(&self, bag: BagId, spec: RingSpec) {
        (**self).insert(bag, spec)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<C: RingCache + ?Sized> RingCache for &C {
    fn get(&self, bag: BagId) -> Option<RingSpec> {
        (**self).get(bag)
    }

    fn insert(&self, bag: BagId, spec: RingSpec) {
        (**self).insert(bag, spec)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cache_never_hits() {
        let cache = NoCache;
        cache.insert(BagId(1), RingSpec::plain(1));
        assert_eq!(cache.get(BagId(1)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_memory_cache_roundtrip() {
        let cache = MemoryCache::new();
        assert!(cache.is_empty());
        cache.insert(BagId(7443), RingSpec::suffixed(2, 9));
        assert_eq!(cache.get(BagId(7443)), Some(RingSpec::suffixed(2, 9)));
        assert_eq!(cache.get(BagId(1)), None);
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_bounded_cache_drops_new_entries() {
        let cache = MemoryCache::bounded(2);
        cache.insert(BagId(1), RingSpec::plain(1));
        cache.insert(BagId(2), RingSpec::plain(5));
        cache.insert(BagId(3), RingSpec::suffixed(1, 3));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(BagId(3)), None);

        // Overwriting an existing key is still allowed at the limit.
        cache.insert(BagId(1), RingSpec::plain(1));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_bounded_cache_limit_holds_across_threads() {
        let cache = Arc::new(MemoryCache::bounded(10));
        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for bag in 1..=200u32 {
                        // Overlapping key ranges exercise same-key races too.
                        cache.insert(BagId(bag + t * 50), RingSpec::plain(1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 10);

        cache.clear();
        assert!(cache.is_empty());
        for bag in 1..=20 {
            cache.insert(BagId(bag), RingSpec::plain(2));
        }
        assert_eq!(cache.len(), 10);
    }

    #[test]
    fn test_shared_cache_through_arc() {
        let shared = Arc::new(MemoryCache::new());
        let handle = Arc::clone(&shared);
        handle.insert(BagId(9), RingSpec::plain(3));
        assert_eq!(shared.get(BagId(9)), Some(RingSpec::plain(3)));
    }
}
