//! # Forge Pools
//!
//! Forging burns common rings of one material for a random ring of a rarer
//! tier and the same material. The pool for a (tier, material) pair is every
//! ring of that tier and material, weighted by its max supply.

use serde::Serialize;

use rfl_core::{ItemLevel, RingId};

use crate::inventory::Inventory;

/// Rings a forge of one tier and material can yield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgePool {
    /// Target tier.
    pub level: ItemLevel,
    /// 1-based material index.
    pub material: u32,
    /// `(ring id, max supply)` in ascending ring-id order.
    pub rings: Vec<(RingId, u32)>,
}

impl ForgePool {
    /// Total supply across the pool.
    pub fn total_supply(&self) -> u32 {
        self.rings.iter().map(|(_, supply)| supply).sum()
    }

    /// No ring of this tier and material exists.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Number of distinct rings in the pool.
    pub fn len(&self) -> usize {
        self.rings.len()
    }
}

/// Collect the forge pool for `level` and `material`.
///
/// An unknown material or a tier with no rings yields an empty pool.
pub fn forge_pool(inventory: &Inventory, level: ItemLevel, material: u32) -> ForgePool {
    let mut rings: Vec<(RingId, u32)> = inventory
        .entries()
        .iter()
        .filter(|e| e.spec.material == material && e.level() == Some(level))
        .map(|e| (e.ring_id, e.max_supply()))
        .collect();
    rings.sort_by_key(|(id, _)| *id);
    tracing::trace!(%level, material, rings = rings.len(), "forge pool");
    ForgePool {
        level,
        material,
        rings,
    }
}
