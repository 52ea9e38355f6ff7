//! # Addresses Subcommand
//!
//! Prints the rings contract address and the bag collections that can
//! claim matching rings on a chain. The chain defaults to the configured
//! one.

use anyhow::Result;
use clap::Args;

use rfl_core::ChainId;
use rfl_market::{bag_sources, Contract};

use crate::config::CliConfig;

/// Arguments for `rfl addresses`.
#[derive(Args, Debug)]
pub struct AddressesArgs {
    /// Chain id; overrides the configured chain.
    #[arg(long)]
    pub chain: Option<ChainId>,

    /// Fall back to the first known deployment for an unknown chain.
    #[arg(long)]
    pub fallback: bool,
}

/// Execute `rfl addresses`.
pub fn run_addresses(args: &AddressesArgs, config: &CliConfig) -> Result<u8> {
    let chain = args.chain.unwrap_or(config.chain_id);
    let rings = Contract::Rings.address(chain, args.fallback)?;
    println!("  chain:   {chain}");
    println!("  rings:   {rings}");
    for source in bag_sources(chain) {
        println!("  {:<20} {}", source.name, source.address);
    }
    Ok(0)
}
