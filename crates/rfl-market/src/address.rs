//! # Contract Addresses
//!
//! Deployed addresses per chain for the three bag collections a ring can be
//! matched against and for the rings contract itself. Mainnet (1) and
//! Rinkeby (4) are the only deployments.

use serde::Serialize;

use rfl_core::ChainId;

use crate::error::MarketError;

/// Per-chain deployment table, in declaration order.
pub type AddressMap = &'static [(ChainId, &'static str)];

const LOOT: AddressMap = &[
    (ChainId::MAINNET, "0xFF9C1b15B16263C61d017ee9F65C50e4AE0113D7"),
    (ChainId::RINKEBY, "0x5503ACa5c031d32f1D13afb06381F8C91c6e90C2"),
];

const MLOOT: AddressMap = &[
    (ChainId::MAINNET, "0x1dfe7ca09e99d10835bf73044a23b73fc20623df"),
    (ChainId::RINKEBY, "0x3c5D704569f319813EC0720363d2C5B117E5D06b"),
];

const GENESIS: AddressMap = &[
    (ChainId::MAINNET, "0x8dB687aCEb92c66f013e1D614137238Cc698fEdb"),
    (ChainId::RINKEBY, "0xAD2e742DF1A7622e65788d4dEdc073934419E689"),
];

const RINGS: AddressMap = &[
    (ChainId::MAINNET, "0x73c5013Fa9701425be4a436cA0CeC1C0898e6F14"),
    (ChainId::RINKEBY, "0x2fE310CeDa00f580Bb678eB4822F08c39d6d094A"),
];

/// A deployed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Contract {
    /// The original Loot bags.
    Loot,
    /// More Loot bags.
    #[serde(rename = "mloot")]
    MLoot,
    /// Genesis Adventurer bags.
    Genesis,
    /// The RingsForLoot ERC-1155 contract.
    Rings,
}

impl Contract {
    /// Returns the lowercase key of this contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loot => "loot",
            Self::MLoot => "mloot",
            Self::Genesis => "genesis",
            Self::Rings => "rings",
        }
    }

    /// Deployment table for this contract.
    pub fn addresses(&self) -> AddressMap {
        match self {
            Self::Loot => LOOT,
            Self::MLoot => MLOOT,
            Self::Genesis => GENESIS,
            Self::Rings => RINGS,
        }
    }

    /// Address on `chain`; see [`get_address`].
    pub fn address(&self, chain: ChainId, fallback: bool) -> Result<&'static str, MarketError> {
        get_address(self.addresses(), chain, fallback)
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the address for `chain`.
///
/// With `fallback`, an unknown chain resolves to the first deployment in
/// the table instead of failing.
///
/// # Errors
///
/// `AddressUnavailable` when the chain is absent and `fallback` is false,
/// or when the table is empty.
pub fn get_address(
    map: AddressMap,
    chain: ChainId,
    fallback: bool,
) -> Result<&'static str, MarketError> {
    if let Some((_, address)) = map.iter().find(|(c, _)| *c == chain) {
        return Ok(*address);
    }
    if fallback {
        if let Some((first, address)) = map.first() {
            tracing::debug!(%chain, fallback = %first, "no deployment on chain, using fallback");
            return Ok(*address);
        }
    }
    Err(MarketError::AddressUnavailable { chain })
}

/// A bag collection whose tokens can claim a matching ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BagSource {
    /// Display name of the collection.
    pub name: &'static str,
    /// Contract the collection is deployed as.
    pub contract: Contract,
    /// Deployed address on the requested chain.
    pub address: &'static str,
}

/// Bag collections deployed on `chain`: Loot, mLoot, then Genesis
/// Adventurer. Empty on chains without deployments.
pub fn bag_sources(chain: ChainId) -> Vec<BagSource> {
    [
        ("Loot Bag", Contract::Loot),
        ("mLoot Bag", Contract::MLoot),
        ("Genesis Adventurer", Contract::Genesis),
    ]
    .into_iter()
    .filter_map(|(name, contract)| {
        contract
            .address(chain, false)
            .ok()
            .map(|address| BagSource {
                name,
                contract,
                address,
            })
    })
    .collect()
}
