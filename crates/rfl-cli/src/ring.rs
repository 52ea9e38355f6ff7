//! # Ring Subcommand
//!
//! Derives the ring of each given bag and prints its name, packed encoding,
//! and trait fields.
//!
//! ```bash
//! rfl ring 1 129
//! rfl ring 7455 --json
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use rfl_core::{encode_ring, BagId, RingCache, RingEngine, RingSpec};

use crate::config::CliConfig;

/// Arguments for `rfl ring`.
#[derive(Args, Debug)]
pub struct RingArgs {
    /// Bag token ids.
    #[arg(required = true)]
    pub bag_ids: Vec<BagId>,

    /// Print a JSON array instead of text.
    #[arg(long)]
    pub json: bool,
}

/// One derived ring, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingReport {
    pub bag_id: BagId,
    pub name: String,
    pub encoding: u64,
    pub spec: RingSpec,
}

/// Derive reports for `bags`.
pub fn describe<C: RingCache>(engine: &RingEngine<C>, bags: &[BagId]) -> Result<Vec<RingReport>> {
    bags.iter()
        .map(|&bag_id| -> Result<RingReport> {
            let spec = engine.ring(bag_id);
            let name = spec
                .name(false)
                .with_context(|| format!("bag {bag_id} derived an invalid ring"))?;
            let encoding = encode_ring(&spec)?;
            Ok(RingReport {
                bag_id,
                name,
                encoding,
                spec,
            })
        })
        .collect()
}

/// Execute `rfl ring`.
pub fn run_ring(args: &RingArgs, config: &CliConfig) -> Result<u8> {
    let engine = crate::engine(config);
    let reports = describe(&engine, &args.bag_ids)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(0);
    }

    for report in &reports {
        println!("bag {}: {}", report.bag_id, report.name);
        println!("  encoding: {}", report.encoding);
        println!("  fields:   {}", report.spec);
    }
    Ok(0)
}
