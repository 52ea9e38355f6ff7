//! # rfl CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rfl_cli::addresses::{run_addresses, AddressesArgs};
use rfl_cli::codec::{run_decode, run_encode, DecodeArgs, EncodeArgs};
use rfl_cli::codegen::{run_codegen, CodegenArgs};
use rfl_cli::config::CliConfig;
use rfl_cli::inventory::{run_inventory, InventoryArgs};
use rfl_cli::level::{run_level, LevelArgs};
use rfl_cli::price::{run_price, PriceArgs};
use rfl_cli::ring::{run_ring, RingArgs};

/// Rings for Loot CLI
///
/// Recomputes the RingsForLoot contract's ring derivation off-chain:
/// bag-to-ring lookups, spec encoding, rarity tiers, the ring inventory,
/// contract data, and prices.
#[derive(Parser, Debug)]
#[command(name = "rfl", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive the ring of one or more bags.
    Ring(RingArgs),

    /// Pack a ring spec into its integer encoding.
    Encode(EncodeArgs),

    /// Unpack an integer encoding into a ring.
    Decode(DecodeArgs),

    /// Classify a max supply into a rarity tier.
    Level(LevelArgs),

    /// Export the ring inventory, or check an exported one.
    Inventory(InventoryArgs),

    /// Print the contract's packed ring tables.
    Codegen(CodegenArgs),

    /// Quote the purchase price of a ring id.
    Price(PriceArgs),

    /// Show contract addresses for a chain.
    Addresses(AddressesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Ring(args) => run_ring(&args, &config),
        Commands::Encode(args) => run_encode(&args, &config),
        Commands::Decode(args) => run_decode(&args, &config),
        Commands::Level(args) => run_level(&args, &config),
        Commands::Inventory(args) => run_inventory(&args, &config),
        Commands::Codegen(args) => run_codegen(&args, &config),
        Commands::Price(args) => run_price(&args, &config),
        Commands::Addresses(args) => run_addresses(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfl_core::{BagId, ChainId, RingId};

    #[test]
    fn cli_parse_ring_multiple_bags() {
        let cli = Cli::try_parse_from(["rfl", "ring", "1", "129", "--json"]).unwrap();
        if let Commands::Ring(args) = cli.command {
            assert_eq!(args.bag_ids, vec![BagId(1), BagId(129)]);
            assert!(args.json);
        } else {
            panic!("expected ring command");
        }
    }

    #[test]
    fn cli_parse_ring_rejects_bad_bag() {
        assert!(Cli::try_parse_from(["rfl", "ring", "0"]).is_err());
        assert!(Cli::try_parse_from(["rfl", "ring", "abc"]).is_err());
        assert!(Cli::try_parse_from(["rfl", "ring"]).is_err());
    }

    #[test]
    fn cli_parse_encode() {
        let cli = Cli::try_parse_from([
            "rfl",
            "encode",
            "--material",
            "5",
            "--suffix",
            "15",
            "--name-prefix",
            "9",
            "--name-suffix",
            "15",
            "--aug",
        ])
        .unwrap();
        if let Commands::Encode(args) = cli.command {
            assert_eq!(args.material, 5);
            assert_eq!(args.name_prefix, Some(9));
            assert!(args.aug);
        } else {
            panic!("expected encode command");
        }
    }

    #[test]
    fn cli_parse_encode_name_parts_required_together() {
        let result = Cli::try_parse_from([
            "rfl",
            "encode",
            "--material",
            "1",
            "--suffix",
            "3",
            "--name-prefix",
            "9",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_decode_and_level() {
        let cli = Cli::try_parse_from(["rfl", "decode", "243773"]).unwrap();
        assert!(matches!(cli.command, Commands::Decode(DecodeArgs { value: 243773 })));
        let cli = Cli::try_parse_from(["rfl", "level", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Level(LevelArgs { supply: 2 })));
    }

    #[test]
    fn cli_parse_inventory_options() {
        let cli = Cli::try_parse_from(["rfl", "inventory", "--out", "dist/rings.json"]).unwrap();
        if let Commands::Inventory(args) = cli.command {
            assert_eq!(args.out, Some(PathBuf::from("dist/rings.json")));
            assert!(!args.module);
            assert!(args.check.is_none());
        } else {
            panic!("expected inventory command");
        }
        assert!(Cli::try_parse_from(["rfl", "inventory", "--out", "a", "--check", "b"]).is_err());
    }

    #[test]
    fn cli_parse_price_and_addresses() {
        let cli = Cli::try_parse_from(["rfl", "price", "164"]).unwrap();
        if let Commands::Price(args) = cli.command {
            assert_eq!(args.ring_id, RingId(164));
        }
        let cli = Cli::try_parse_from(["rfl", "addresses", "--chain", "4", "--fallback"]).unwrap();
        if let Commands::Addresses(args) = cli.command {
            assert_eq!(args.chain, Some(ChainId(4)));
            assert!(args.fallback);
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["rfl", "codegen"]).unwrap();
        assert_eq!(cli0.verbose, 0);
        let cli2 = Cli::try_parse_from(["rfl", "-vv", "codegen"]).unwrap();
        assert_eq!(cli2.verbose, 2);
        let cli3 = Cli::try_parse_from(["rfl", "codegen", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_config_option() {
        let cli = Cli::try_parse_from(["rfl", "--config", "rfl.yaml", "level", "5"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("rfl.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["rfl"]).is_err());
        assert!(Cli::try_parse_from(["rfl", "nonexistent"]).is_err());
    }
}
