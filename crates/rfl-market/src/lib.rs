//! # rfl-market — Marketplace Data
//!
//! Everything the storefront needs to talk to the RingsForLoot contract
//! that is not the ring derivation itself:
//!
//! - **Sale state**: the contract's `saleState()` values and what each one
//!   allows.
//! - **Prices**: purchase prices per rarity tier and forge fees, in wei.
//! - **Forge recipes**: how many common rings of one material each forge
//!   tier burns.
//! - **Addresses**: deployed contract addresses per chain, and the bag
//!   collections a ring can be matched against.
//! - **Balances**: folding ERC-1155 `TransferSingle` events into per-ring
//!   balances.
//! - **Revert messages**: extracting a short user-facing message from a
//!   JSON-RPC error payload.
//!
//! ## Crate Policy
//!
//! - Pure data and folds. No RPC client, no signing; the caller supplies
//!   events and error payloads.

pub mod address;
pub mod balances;
pub mod error;
pub mod forge;
pub mod price;
pub mod revert;
pub mod sale;

pub use address::{bag_sources, get_address, BagSource, Contract};
pub use balances::{apply_transfer_events, minted_ring, RingBalances, TransferSingle, ZERO_ADDRESS};
pub use error::MarketError;
pub use forge::ForgeRecipe;
pub use price::{
    common_purchase_value, forge_price, matching_price, purchase_price, purchase_price_for_supply,
    Wei,
};
pub use revert::extract_error_message;
pub use sale::SaleState;
