//! # Market Errors

use rfl_core::ChainId;
use thiserror::Error;

/// Error resolving marketplace data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// No deployment of the contract on the requested chain.
    #[error("Contract address not available on chain {chain}")]
    AddressUnavailable {
        /// The requested chain.
        chain: ChainId,
    },

    /// `saleState()` returned a value outside the known states.
    #[error("unknown sale state {0}")]
    UnknownSaleState(u8),

    /// A forge burning this many common rings does not exist.
    #[error("no forge recipe burns {0} common rings")]
    UnknownRecipe(u32),
}
