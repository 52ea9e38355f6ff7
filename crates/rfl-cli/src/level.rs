//! # Level Subcommand
//!
//! Classifies a max supply into its rarity tier. Prints `none` for a
//! supply of zero.

use anyhow::Result;
use clap::Args;

use rfl_core::ring_level_from_supply;

use crate::config::CliConfig;

/// Arguments for `rfl level`.
#[derive(Args, Debug)]
pub struct LevelArgs {
    /// Max supply of a ring.
    pub supply: u32,
}

/// Tier name for `supply`.
pub fn level_label(supply: u32) -> &'static str {
    ring_level_from_supply(supply).map_or("none", |level| level.as_str())
}

/// Execute `rfl level`.
pub fn run_level(args: &LevelArgs, _config: &CliConfig) -> Result<u8> {
    println!("{}", level_label(args.supply));
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(1001), "common");
        assert_eq!(level_label(1000), "epic");
        assert_eq!(level_label(3), "epic");
        assert_eq!(level_label(2), "legendary");
        assert_eq!(level_label(1), "mythic");
        assert_eq!(level_label(0), "none");
    }
}
