//! # Encode / Decode Subcommands
//!
//! Pack a ring spec into its integer encoding, or unpack an encoding and
//! print the ring it names.
//!
//! ```bash
//! rfl encode --material 5 --suffix 15 --name-prefix 9 --name-suffix 15 --aug
//! rfl decode 243773
//! ```

use anyhow::{Context, Result};
use clap::Args;

use rfl_core::{decode_valid_ring, encode_ring, RingSpec};

use crate::config::CliConfig;

/// Arguments for `rfl encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Material index, 1-based.
    #[arg(long)]
    pub material: u32,

    /// Suffix index, 1-based; 0 for none.
    #[arg(long, default_value_t = 0)]
    pub suffix: u32,

    /// Name prefix index, 1-based.
    #[arg(long, requires = "name_suffix")]
    pub name_prefix: Option<u32>,

    /// Name suffix index, 1-based.
    #[arg(long, requires = "name_prefix")]
    pub name_suffix: Option<u32>,

    /// Augmented (`+1`) ring.
    #[arg(long)]
    pub aug: bool,
}

impl EncodeArgs {
    pub fn spec(&self) -> RingSpec {
        RingSpec {
            material: self.material,
            suffix: self.suffix,
            name_prefix: self.name_prefix.unwrap_or(0),
            name_suffix: self.name_suffix.unwrap_or(0),
            aug: u32::from(self.aug),
        }
    }
}

/// Arguments for `rfl decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Packed ring encoding.
    pub value: u64,
}

/// Execute `rfl encode`.
pub fn run_encode(args: &EncodeArgs, _config: &CliConfig) -> Result<u8> {
    let spec = args.spec();
    let value = encode_ring(&spec).with_context(|| format!("cannot encode {spec}"))?;
    let name = spec.name(false)?;
    println!("{value}");
    tracing::info!(%name, value, "encoded ring");
    Ok(0)
}

/// Execute `rfl decode`.
pub fn run_decode(args: &DecodeArgs, _config: &CliConfig) -> Result<u8> {
    let spec = decode_valid_ring(args.value)
        .with_context(|| format!("{} does not encode a valid ring", args.value))?;
    println!("{}", spec.name(false)?);
    println!("  fields: {spec}");
    Ok(0)
}
