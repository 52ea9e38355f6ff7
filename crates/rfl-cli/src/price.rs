//! # Price Subcommand
//!
//! Looks a ring id up in the catalog and prints its tier, max supply,
//! purchase price, and the forge fee for its tier.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use rfl_catalog::Inventory;
use rfl_core::{ring_max_supply, ItemLevel, RingId};
use rfl_market::{forge_price, purchase_price, Wei};

use crate::config::CliConfig;

/// Arguments for `rfl price`.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Ring token id (the first bag id that derives the ring).
    pub ring_id: RingId,
}

/// Price quote for one ring id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub ring_id: RingId,
    pub name: String,
    pub max_supply: u32,
    pub level: ItemLevel,
    pub price: Wei,
    pub forge_fee: Option<Wei>,
}

/// Quote `ring` from `inventory`.
pub fn quote(inventory: &Inventory, ring: RingId) -> Result<Quote> {
    let name = inventory
        .ring_name(ring)
        .with_context(|| format!("ring id {ring} is not in the catalog"))?
        .to_string();
    let max_supply = ring_max_supply(inventory, ring);
    let level = inventory
        .entry(ring)
        .and_then(|e| e.level())
        .with_context(|| format!("ring id {ring} has no supply"))?;
    Ok(Quote {
        ring_id: ring,
        name,
        max_supply,
        level,
        price: purchase_price(level),
        forge_fee: forge_price(level),
    })
}

/// Execute `rfl price`.
pub fn run_price(args: &PriceArgs, config: &CliConfig) -> Result<u8> {
    let inventory = crate::build_inventory(config)?;
    let quote = quote(&inventory, args.ring_id)?;
    println!("  ring:      {} ({})", quote.name, quote.ring_id);
    println!("  level:     {}", quote.level);
    println!("  supply:    {}", quote.max_supply);
    println!("  price:     {} ETH", quote.price);
    if let Some(fee) = quote.forge_fee {
        println!("  forge fee: {fee} ETH");
    }
    Ok(0)
}
