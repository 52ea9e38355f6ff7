//! # Forge Recipes
//!
//! A forge burns common rings of one material and mints a random ring of a
//! rarer tier in that material. The tier is set by how many commons burn:
//! two for epic, three for legendary, four for mythic.

use serde::{Deserialize, Serialize};

use rfl_core::ItemLevel;

use crate::error::MarketError;
use crate::price::{forge_price, Wei};

/// One forge option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForgeRecipe {
    /// Tier of the forged ring.
    pub level: ItemLevel,
    /// Common rings of the chosen material burned.
    pub commons_required: u32,
    /// Fee sent with the forge transaction.
    pub fee: Wei,
}

impl ForgeRecipe {
    /// All recipes, cheapest first.
    pub fn all() -> [ForgeRecipe; 3] {
        [ItemLevel::Epic, ItemLevel::Legendary, ItemLevel::Mythic].map(|level| {
            // Only non-common tiers are listed, so both lookups succeed.
            let commons_required = commons_for(level).unwrap_or(0);
            let fee = forge_price(level).unwrap_or(Wei::ZERO);
            ForgeRecipe {
                level,
                commons_required,
                fee,
            }
        })
    }

    /// Recipe producing `level`; `None` for common.
    pub fn for_level(level: ItemLevel) -> Option<ForgeRecipe> {
        Self::all().into_iter().find(|r| r.level == level)
    }

    /// Recipe burning `amount` commons, as passed to the contract's `forge`.
    pub fn for_commons(amount: u32) -> Result<ForgeRecipe, MarketError> {
        Self::all()
            .into_iter()
            .find(|r| r.commons_required == amount)
            .ok_or(MarketError::UnknownRecipe(amount))
    }

    /// Additional commons needed on top of `balance`; 0 when it suffices.
    pub fn shortfall(&self, balance: u32) -> u32 {
        self.commons_required.saturating_sub(balance)
    }
}

fn commons_for(level: ItemLevel) -> Option<u32> {
    match level {
        ItemLevel::Common => None,
        ItemLevel::Epic => Some(2),
        ItemLevel::Legendary => Some(3),
        ItemLevel::Mythic => Some(4),
    }
}
