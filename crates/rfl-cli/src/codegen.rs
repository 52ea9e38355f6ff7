//! # Codegen Subcommand
//!
//! Prints the packed per-material ring tables the RingsForLoot contract is
//! deployed with, as Solidity assignment lines or as JSON.

use anyhow::Result;
use clap::Args;

use rfl_catalog::ContractData;

use crate::config::CliConfig;

/// Arguments for `rfl codegen`.
#[derive(Args, Debug)]
pub struct CodegenArgs {
    /// Print the tables as JSON instead of Solidity lines.
    #[arg(long)]
    pub json: bool,
}

/// Execute `rfl codegen`.
pub fn run_codegen(args: &CodegenArgs, config: &CliConfig) -> Result<u8> {
    let inventory = crate::build_inventory(config)?;
    let data = ContractData::from_inventory(&inventory)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print!("{}", data.render());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codegen_small_range() {
        let config = CliConfig {
            bag_count: 20,
            ..CliConfig::default()
        };
        assert_eq!(run_codegen(&CodegenArgs { json: false }, &config).unwrap(), 0);
        assert_eq!(run_codegen(&CodegenArgs { json: true }, &config).unwrap(), 0);
    }
}
