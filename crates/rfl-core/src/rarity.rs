//! # Rarity Tiers
//!
//! A ring's tier depends on how many bags share its trait combination,
//! which is the ring id's maximum mint supply:
//!
//! | Max supply | Tier |
//! |------------|------|
//! | > 1000 | common |
//! | 3..=1000 | epic |
//! | 2 | legendary |
//! | 1 | mythic |
//! | 0 | unknown ring id |
//!
//! Supplies come from a [`SupplyTable`], computed once over every bag
//! derivation (see the `rfl-catalog` crate).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::error::RingError;
use crate::identity::RingId;

/// Supply above which a ring is common.
pub const COMMON_SUPPLY_FLOOR: u32 = 1000;
/// Supply above which a non-common ring is epic.
pub const EPIC_SUPPLY_FLOOR: u32 = 2;

/// Rarity tier of a ring id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemLevel {
    /// One of the five plain rings.
    Common,
    /// Suffixed rings shared by a handful of bags.
    Epic,
    /// Exactly two bags.
    Legendary,
    /// A single bag.
    Mythic,
}

impl ItemLevel {
    /// All tiers from most to least common.
    pub fn all() -> &'static [ItemLevel] {
        &[Self::Common, Self::Epic, Self::Legendary, Self::Mythic]
    }

    /// Returns the lowercase string identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Mythic => "mythic",
        }
    }
}

impl std::fmt::Display for ItemLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemLevel {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Self::Common),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            "mythic" => Ok(Self::Mythic),
            other => Err(RingError::InvalidIdentifier(format!(
                "unknown item level: {other:?}"
            ))),
        }
    }
}

/// Classify a max supply. `None` for 0, meaning the ring id is unknown.
pub fn ring_level_from_supply(max_supply: u32) -> Option<ItemLevel> {
    match max_supply {
        0 => None,
        1 => Some(ItemLevel::Mythic),
        s if s > COMMON_SUPPLY_FLOOR => Some(ItemLevel::Common),
        s if s > EPIC_SUPPLY_FLOOR => Some(ItemLevel::Epic),
        _ => Some(ItemLevel::Legendary),
    }
}

/// A precomputed ring id → max supply lookup.
pub trait SupplyTable {
    /// Max supply of `ring`, or 0 if the id is not a known ring.
    fn max_supply(&self, ring: RingId) -> u32;

    /// Rarity tier of `ring`, or `None` if unknown.
    fn level(&self, ring: RingId) -> Option<ItemLevel> {
        ring_level_from_supply(self.max_supply(ring))
    }
}

impl SupplyTable for HashMap<RingId, u32> {
    fn max_supply(&self, ring: RingId) -> u32 {
        self.get(&ring).copied().unwrap_or(0)
    }
}

impl SupplyTable for BTreeMap<RingId, u32> {
    fn max_supply(&self, ring: RingId) -> u32 {
        self.get(&ring).copied().unwrap_or(0)
    }
}

/// Max supply of `ring` in `table`; 0 for ids the table does not know.
pub fn ring_max_supply(table: &impl SupplyTable, ring: RingId) -> u32 {
    table.max_supply(ring)
}
