//! # rfl-catalog — Ring Catalog
//!
//! Runs the engine over every bag once and derives the lookup tables the
//! rest of the system reads:
//!
//! - **Inventory**: ring name → bag ids, in first-appearance order. A ring's
//!   id is its first bag id; its max supply is the number of bags.
//! - **Lookups**: ring id → supply / name, bag id → ring id, name → ring id,
//!   and the five common ring ids by material.
//! - **Export**: the inventory as JSON plus a SHA-256 content digest, so a
//!   checked-in copy can be verified against a fresh derivation.
//! - **Contract data**: the hex-packed id/supply blobs the RingsForLoot
//!   contract is deployed with.
//! - **Forge pools**: which rings a forge of a given tier and material can
//!   yield.
//!
//! ## Crate Policy
//!
//! - Depends only on `rfl-core` internally.
//! - Deterministic: the same bag count always yields byte-identical exports.

pub mod contract;
pub mod error;
pub mod export;
pub mod forge;
pub mod inventory;

pub use contract::ContractData;
pub use error::CatalogError;
pub use export::{content_digest, InventoryExport};
pub use forge::{forge_pool, ForgePool};
pub use inventory::{Inventory, RingEntry, DEFAULT_BAG_COUNT};
