//! # Ring Engine
//!
//! Owns a [`RingCache`] and routes bag-to-ring derivation through it.
//! `RingEngine::new()` uses [`NoCache`]; hand in a [`MemoryCache`] (or an
//! `Arc` of one to share it between engines) to memoize.
//!
//! [`MemoryCache`]: crate::MemoryCache

use crate::cache::{NoCache, RingCache};
use crate::error::RingError;
use crate::format::ring_to_string;
use crate::generator::ring_from_bag;
use crate::identity::BagId;
use crate::spec::RingSpec;

/// Derives ring specs for bags, memoizing through its cache.
#[derive(Debug, Default)]
pub struct RingEngine<C = NoCache> {
    cache: C,
}

impl RingEngine<NoCache> {
    /// An engine without memoization.
    pub fn new() -> Self {
        Self { cache: NoCache }
    }
}

impl<C: RingCache> RingEngine<C> {
    /// An engine that memoizes through `cache`.
    pub fn with_cache(cache: C) -> Self {
        Self { cache }
    }

    /// The engine's cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Derive (or recall) the ring for `bag`.
    pub fn ring(&self, bag: BagId) -> RingSpec {
        if let Some(spec) = self.cache.get(bag) {
            return spec;
        }
        let spec = ring_from_bag(bag);
        self.cache.insert(bag, spec);
        spec
    }

    /// The display name of the ring for `bag`.
    ///
    /// # Errors
    ///
    /// Never fails for derived rings; the `Result` comes from
    /// [`ring_to_string()`], which validates its input.
    pub fn ring_name(&self, bag: BagId) -> Result<String, RingError> {
        ring_to_string(&self.ring(bag), false)
    }
}
