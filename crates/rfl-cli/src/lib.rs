//! # rfl-cli — CLI Tool for Rings for Loot
//!
//! Provides the `rfl` command-line interface over the ring engine, the
//! catalog, and the market data.
//!
//! ## Subcommands
//!
//! - `rfl ring` — Derive the ring of one or more bags.
//! - `rfl encode` / `rfl decode` — Pack and unpack ring specs.
//! - `rfl level` — Classify a max supply into a rarity tier.
//! - `rfl inventory` — Export or check the ring inventory.
//! - `rfl codegen` — Print the contract's packed ring data.
//! - `rfl price` — Quote purchase and forge prices for a ring id.
//! - `rfl addresses` — Show contract addresses for a chain.
//!
//! ```bash
//! rfl ring 1 129 7455
//! rfl -v inventory --out dist/rings.json
//! rfl --config rfl.yaml codegen
//! ```

pub mod addresses;
pub mod codec;
pub mod codegen;
pub mod config;
pub mod inventory;
pub mod level;
pub mod price;
pub mod ring;

use anyhow::{Context, Result};

use rfl_catalog::Inventory;
use rfl_core::{MemoryCache, RingEngine};

use crate::config::CliConfig;

/// A memoizing engine sized by the configured cache limit.
pub fn engine(config: &CliConfig) -> RingEngine<MemoryCache> {
    let cache = match config.cache_limit {
        Some(limit) => MemoryCache::bounded(limit),
        None => MemoryCache::new(),
    };
    RingEngine::with_cache(cache)
}

/// Derive the inventory over the configured bag range.
pub fn build_inventory(config: &CliConfig) -> Result<Inventory> {
    Inventory::build(&engine(config), config.bag_count)
        .with_context(|| format!("failed to build inventory over {} bags", config.bag_count))
}
