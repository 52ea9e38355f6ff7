//! # Prices
//!
//! Purchase prices per rarity tier and forge fees, in wei.
//!
//! | Tier | Purchase | Forge fee |
//! |------|----------|-----------|
//! | common | 0.02 ETH | n/a |
//! | epic | 0.06 ETH | 0.02 ETH |
//! | legendary | 0.1 ETH | 0.04 ETH |
//! | mythic | 0.14 ETH | 0.06 ETH |
//!
//! A whitelisted holder mints their first ring for free and pays only gas.

use serde::{Deserialize, Serialize};

use rfl_core::{ring_level_from_supply, ItemLevel};

const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;
const WEI_PER_CENTI_ETHER: u128 = WEI_PER_ETHER / 100;

/// An amount of wei.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wei(pub u128);

impl Wei {
    /// No payment.
    pub const ZERO: Wei = Wei(0);

    /// `n` hundredths of an ether.
    pub const fn centi_ether(n: u128) -> Self {
        Self(n * WEI_PER_CENTI_ETHER)
    }

    /// Access the inner amount.
    pub fn get(self) -> u128 {
        self.0
    }

    /// Whether the amount is free.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u128::from(quantity)).map(Self)
    }
}

/// Formats as decimal ether without trailing zeros, e.g. `0.06`, `1`.
impl std::fmt::Display for Wei {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / WEI_PER_ETHER;
        let frac = self.0 % WEI_PER_ETHER;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:018}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

/// Random or matching common ring.
pub const PRICE_RING_COMMON: Wei = Wei::centi_ether(2);
/// Matching epic ring.
pub const PRICE_RING_EPIC: Wei = Wei::centi_ether(6);
/// Matching legendary ring.
pub const PRICE_RING_LEGENDARY: Wei = Wei::centi_ether(10);
/// Matching mythic ring.
pub const PRICE_RING_MYTHIC: Wei = Wei::centi_ether(14);
/// Fee for forging an epic ring.
pub const PRICE_FORGE_EPIC: Wei = Wei::centi_ether(2);
/// Fee for forging a legendary ring.
pub const PRICE_FORGE_LEGENDARY: Wei = Wei::centi_ether(4);
/// Fee for forging a mythic ring.
pub const PRICE_FORGE_MYTHIC: Wei = Wei::centi_ether(6);

/// Purchase price of one ring of `level`.
pub fn purchase_price(level: ItemLevel) -> Wei {
    match level {
        ItemLevel::Common => PRICE_RING_COMMON,
        ItemLevel::Epic => PRICE_RING_EPIC,
        ItemLevel::Legendary => PRICE_RING_LEGENDARY,
        ItemLevel::Mythic => PRICE_RING_MYTHIC,
    }
}

/// Forge fee for a ring of `level`. Common rings cannot be forged.
pub fn forge_price(level: ItemLevel) -> Option<Wei> {
    match level {
        ItemLevel::Common => None,
        ItemLevel::Epic => Some(PRICE_FORGE_EPIC),
        ItemLevel::Legendary => Some(PRICE_FORGE_LEGENDARY),
        ItemLevel::Mythic => Some(PRICE_FORGE_MYTHIC),
    }
}

/// Purchase price of a ring with the given max supply; `None` for supply 0.
pub fn purchase_price_for_supply(max_supply: u32) -> Option<Wei> {
    ring_level_from_supply(max_supply).map(purchase_price)
}

/// Value sent with a matching mint. Free for a whitelisted holder.
pub fn matching_price(max_supply: u32, whitelisted: bool) -> Option<Wei> {
    if whitelisted {
        return Some(Wei::ZERO);
    }
    purchase_price_for_supply(max_supply)
}

/// Value sent with a random common purchase of `amount` rings. A
/// whitelisted single-ring purchase is free.
pub fn common_purchase_value(amount: u32, whitelisted: bool) -> Option<Wei> {
    if whitelisted && amount == 1 {
        return Some(Wei::ZERO);
    }
    PRICE_RING_COMMON.checked_mul(amount)
}
