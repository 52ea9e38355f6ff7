//! # Inventory — Every Ring and the Bags That Derive It
//!
//! Built by deriving the ring of each bag in `1..=bag_count` and grouping
//! bags by display name. Because bags are visited in ascending order, the
//! first bag of each group is the lowest one, which is the ring id, and the
//! entries end up sorted by ring id.
//!
//! An inventory can also be imported from a previously exported JSON file.
//! Imports are checked structurally (names must parse, bags must be unique)
//! and can be verified against the engine with [`Inventory::verify()`].

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use rfl_core::{
    parse_ring_name, ring_level_from_supply, BagId, ItemLevel, RingCache, RingEngine, RingId,
    RingSpec, SupplyTable,
};

use crate::error::CatalogError;

/// Number of Loot bags; every bag source shares this id range.
pub const DEFAULT_BAG_COUNT: u32 = 8000;

/// One distinct ring and the bags that derive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingEntry {
    /// Lowest bag id deriving this ring.
    pub ring_id: RingId,
    /// Canonical display name.
    pub name: String,
    /// Trait fields.
    pub spec: RingSpec,
    /// Every bag deriving this ring, ascending.
    pub bag_ids: Vec<BagId>,
}

impl RingEntry {
    /// How many of this ring can ever be minted: one per bag.
    pub fn max_supply(&self) -> u32 {
        u32::try_from(self.bag_ids.len()).unwrap_or(u32::MAX)
    }

    /// Rarity tier implied by the max supply.
    pub fn level(&self) -> Option<ItemLevel> {
        ring_level_from_supply(self.max_supply())
    }
}

/// All rings derivable from a range of bags, with lookup indexes.
#[derive(Debug, Clone)]
pub struct Inventory {
    bag_count: u32,
    entries: Vec<RingEntry>,
    by_name: HashMap<String, usize>,
    by_ring: HashMap<RingId, usize>,
    by_bag: HashMap<BagId, RingId>,
}

impl Inventory {
    /// Derive the inventory of bags `1..=bag_count`.
    ///
    /// # Errors
    ///
    /// `EmptyRange` for a zero bag count.
    pub fn build<C: RingCache>(engine: &RingEngine<C>, bag_count: u32) -> Result<Self, CatalogError> {
        if bag_count == 0 {
            return Err(CatalogError::EmptyRange);
        }
        let mut entries: Vec<RingEntry> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for bag in (1..=bag_count).map(BagId) {
            let spec = engine.ring(bag);
            let name = spec.name(false)?;
            let existing = by_name.get(&name).copied();
            match existing {
                Some(index) => entries[index].bag_ids.push(bag),
                None => {
                    by_name.insert(name.clone(), entries.len());
                    entries.push(RingEntry {
                        ring_id: RingId::from_first_bag(bag),
                        name,
                        spec,
                        bag_ids: vec![bag],
                    });
                }
            }
        }

        let inventory = Self::index(bag_count, entries);
        tracing::debug!(
            bag_count,
            rings = inventory.len(),
            "built ring inventory"
        );
        Ok(inventory)
    }

    /// Import an inventory from entries keyed by ring name.
    ///
    /// # Errors
    ///
    /// `Ring(UnknownName)` for a name that is not a canonical ring name,
    /// `EmptyEntry` for a ring without bags, `DuplicateBag` when a bag is
    /// listed twice.
    pub fn from_named_bags(
        named: impl IntoIterator<Item = (String, Vec<BagId>)>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<BagId> = HashSet::new();
        let mut entries = Vec::new();

        for (name, mut bag_ids) in named {
            let spec = parse_ring_name(&name)?;
            bag_ids.sort_unstable();
            let first = *bag_ids
                .first()
                .ok_or_else(|| CatalogError::EmptyEntry(name.clone()))?;
            for &bag in &bag_ids {
                if !seen.insert(bag) {
                    return Err(CatalogError::DuplicateBag { bag, name });
                }
            }
            entries.push(RingEntry {
                ring_id: RingId::from_first_bag(first),
                name,
                spec,
                bag_ids,
            });
        }
        entries.sort_by_key(|e| e.ring_id);

        let bag_count = u32::try_from(seen.len()).unwrap_or(u32::MAX);
        Ok(Self::index(bag_count, entries))
    }

    fn index(bag_count: u32, entries: Vec<RingEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_ring = HashMap::with_capacity(entries.len());
        let mut by_bag = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            by_name.insert(entry.name.clone(), i);
            by_ring.insert(entry.ring_id, i);
            for &bag in &entry.bag_ids {
                by_bag.insert(bag, entry.ring_id);
            }
        }
        Self {
            bag_count,
            entries,
            by_name,
            by_ring,
            by_bag,
        }
    }

    /// Check that every listed bag derives the ring it is listed under.
    ///
    /// # Errors
    ///
    /// `Mismatch` on the first bag that derives a different ring.
    pub fn verify<C: RingCache>(&self, engine: &RingEngine<C>) -> Result<(), CatalogError> {
        for entry in &self.entries {
            for &bag in &entry.bag_ids {
                let derived = engine.ring(bag);
                if derived != entry.spec {
                    return Err(CatalogError::Mismatch {
                        bag,
                        listed: entry.name.clone(),
                        derived: derived.name(false)?,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of bags the inventory covers.
    pub fn bag_count(&self) -> u32 {
        self.bag_count
    }

    /// Entries sorted by ring id.
    pub fn entries(&self) -> &[RingEntry] {
        &self.entries
    }

    /// Number of distinct rings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the inventory has no rings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a ring id.
    pub fn entry(&self, ring: RingId) -> Option<&RingEntry> {
        self.by_ring.get(&ring).map(|&i| &self.entries[i])
    }

    /// Ring id for a canonical display name.
    pub fn ring_id_for_name(&self, name: &str) -> Option<RingId> {
        self.by_name.get(name).map(|&i| self.entries[i].ring_id)
    }

    /// Display name of a ring id.
    pub fn ring_name(&self, ring: RingId) -> Option<&str> {
        self.entry(ring).map(|e| e.name.as_str())
    }

    /// Ring id that `bag` derives.
    pub fn ring_id_for_bag(&self, bag: BagId) -> Option<RingId> {
        self.by_bag.get(&bag).copied()
    }

    /// Ring ids of the plain rings, in material order (Gold, Silver,
    /// Bronze, Platinum, Titanium). Materials no bag produced are skipped.
    pub fn common_ring_ids(&self) -> Vec<RingId> {
        (1..=rfl_core::tables::MATERIALS.len())
            .filter_map(|m| u32::try_from(m).ok())
            .filter_map(|m| {
                let name = RingSpec::plain(m).name(false).ok()?;
                self.ring_id_for_name(&name)
            })
            .collect()
    }

    /// Number of distinct rings per tier.
    pub fn level_counts(&self) -> BTreeMap<ItemLevel, usize> {
        let mut counts = BTreeMap::new();
        for level in self.entries.iter().filter_map(RingEntry::level) {
            *counts.entry(level).or_insert(0) += 1;
        }
        counts
    }
}

impl SupplyTable for Inventory {
    fn max_supply(&self, ring: RingId) -> u32 {
        self.entry(ring).map_or(0, RingEntry::max_supply)
    }
}

impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Inventory {}
