//! # Sale State
//!
//! The contract gates purchases with a three-valued `saleState()`. While
//! paused nothing can be bought. The common-only phase opens random common
//! ring purchases; matching mints and forging open once the sale is active.

use serde::{Deserialize, Serialize};

use crate::error::MarketError;

/// Contract sale phase, as returned by `saleState()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum SaleState {
    /// Nothing can be bought.
    Paused = 0,
    /// Only random common ring purchases are open.
    OnlyCommon = 1,
    /// Purchases, matching mints, and forging are open.
    Active = 2,
}

impl SaleState {
    /// Returns the kebab-case identifier for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paused => "paused",
            Self::OnlyCommon => "only-common",
            Self::Active => "active",
        }
    }

    /// Random common ring purchases are open.
    pub fn allows_common(&self) -> bool {
        !matches!(self, Self::Paused)
    }

    /// Matching mints and forging are open.
    pub fn allows_matching(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Forging uses the same gate as matching mints.
    pub fn allows_forge(&self) -> bool {
        self.allows_matching()
    }
}

impl TryFrom<u8> for SaleState {
    type Error = MarketError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Paused),
            1 => Ok(Self::OnlyCommon),
            2 => Ok(Self::Active),
            other => Err(MarketError::UnknownSaleState(other)),
        }
    }
}

impl From<SaleState> for u8 {
    fn from(state: SaleState) -> Self {
        state as u8
    }
}

impl std::fmt::Display for SaleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
