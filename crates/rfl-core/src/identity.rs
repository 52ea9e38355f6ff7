//! # Identifier Newtypes
//!
//! Newtype wrappers for the identifiers that flow between the engine, the
//! catalog, and the market data. These prevent accidental confusion: you
//! cannot pass a `BagId` where a `RingId` is expected, even though a ring
//! id is numerically the first bag id that produced the ring.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RingError;

/// Token id of a source bag (Loot, mLoot, or Genesis Adventurer).
///
/// The engine is defined for every `u32`, including 0. Bag tokens on chain
/// start at 1, so [`FromStr`] rejects 0 at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BagId(pub u32);

/// Canonical id of a unique ring trait combination: the lowest bag id that
/// derives it. This is also the ERC-1155 token id on the rings contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RingId(pub u32);

/// EVM chain id (1 = mainnet, 4 = rinkeby).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl BagId {
    /// Access the inner token id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl RingId {
    /// Access the inner token id.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The ring id named by the bag that first produced the ring.
    pub fn from_first_bag(bag: BagId) -> Self {
        Self(bag.0)
    }
}

impl ChainId {
    /// Ethereum mainnet.
    pub const MAINNET: ChainId = ChainId(1);
    /// Rinkeby test network.
    pub const RINKEBY: ChainId = ChainId(4);

    /// Access the inner chain id.
    pub fn get(self) -> u64 {
        self.0
    }
}

fn parse_positive(kind: &str, s: &str) -> Result<u32, RingError> {
    let n: u32 = s
        .trim()
        .parse()
        .map_err(|_| RingError::InvalidIdentifier(format!("{kind} must be an integer, got {s:?}")))?;
    if n == 0 {
        return Err(RingError::InvalidIdentifier(format!(
            "{kind} must be positive, got 0"
        )));
    }
    Ok(n)
}

impl FromStr for BagId {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_positive("bag id", s).map(Self)
    }
}

impl FromStr for RingId {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_positive("ring id", s).map(Self)
    }
}

impl FromStr for ChainId {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RingError::InvalidIdentifier(format!("chain id must be an integer, got {s:?}")))
    }
}

impl std::fmt::Display for BagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for RingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
