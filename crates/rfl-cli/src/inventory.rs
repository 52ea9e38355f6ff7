//! # Inventory Subcommand
//!
//! Derives the ring inventory over the configured bag range and writes it
//! as JSON (or as a front-end module), printing the SHA-256 digest of the
//! JSON bytes. `--check` instead verifies a previously written file against
//! a fresh derivation.
//!
//! ```bash
//! rfl inventory --out dist/rings.json
//! rfl inventory --module --out src/rings.ts
//! rfl inventory --check dist/rings.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use rfl_catalog::{content_digest, Inventory, InventoryExport};

use crate::config::CliConfig;

/// Default inventory file name under the output directory.
pub const DEFAULT_FILE_NAME: &str = "rings.json";

/// Arguments for `rfl inventory`.
#[derive(Args, Debug)]
pub struct InventoryArgs {
    /// Output path. Defaults to `rings.json` in the configured output
    /// directory.
    #[arg(long, conflicts_with = "check")]
    pub out: Option<PathBuf>,

    /// Write a TypeScript module exporting `ALL_RINGS_DATA` instead of JSON.
    #[arg(long, conflicts_with = "check")]
    pub module: bool,

    /// Verify an existing JSON inventory instead of writing one.
    #[arg(long, value_name = "PATH")]
    pub check: Option<PathBuf>,
}

/// Execute `rfl inventory`.
pub fn run_inventory(args: &InventoryArgs, config: &CliConfig) -> Result<u8> {
    if let Some(path) = &args.check {
        return check_inventory(path, config);
    }

    let inventory = crate::build_inventory(config)?;
    let export = InventoryExport(&inventory);
    let digest = export.digest()?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| config.output_dir.join(DEFAULT_FILE_NAME));

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    let bytes = if args.module {
        export.to_module_source()?.into_bytes()
    } else {
        export.to_json()?
    };
    std::fs::write(&out, &bytes)
        .with_context(|| format!("failed to write inventory: {}", out.display()))?;

    println!("  rings:   {}", inventory.len());
    println!("  bags:    {}", inventory.bag_count());
    println!("  digest:  {digest}");
    println!("  written: {}", out.display());
    Ok(0)
}

/// Compare a stored inventory file with a fresh derivation. Returns exit
/// code 2 when the file is well-formed but stale.
fn check_inventory(path: &Path, config: &CliConfig) -> Result<u8> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let stored = Inventory::from_json(&bytes)
        .with_context(|| format!("{} is not a valid inventory", path.display()))?;
    stored
        .verify(&crate::engine(config))
        .with_context(|| format!("{} lists a bag under the wrong ring", path.display()))?;

    let fresh = crate::build_inventory(config)?;
    let expected = InventoryExport(&fresh).digest()?;
    let actual = content_digest(&bytes);
    if stored != fresh {
        if stored.bag_count() != fresh.bag_count() {
            bail!(
                "{} covers {} bags, expected {}",
                path.display(),
                stored.bag_count(),
                fresh.bag_count()
            );
        }
        println!("  stale:    {}", path.display());
        return Ok(2);
    }
    if actual != expected {
        tracing::warn!(%actual, %expected, "inventory content matches but bytes differ");
    }
    println!("  verified: {}", path.display());
    println!("  digest:   {expected}");
    Ok(0)
}
