//! # Contract Data
//!
//! The RingsForLoot contract does not recompute the inventory on chain. It
//! is deployed with packed per-material tables instead, generated here:
//!
//! | Table | Content per material |
//! |-------|----------------------|
//! | `commonIds` | ring id of the plain ring |
//! | `commonMax` | its max supply |
//! | `epicIds` | epic ring ids, 2 bytes each |
//! | `epicMax` | epic max supplies, 1 byte each, parallel to `epicIds` |
//! | `legendary` | legendary ring ids, 2 bytes each, written twice (one per copy) |
//! | `mythic` | mythic ring ids, 2 bytes each |
//!
//! Rings appear in ascending ring-id order within each table. Rendering
//! produces the Solidity assignment lines pasted into the contract.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use rfl_core::{ItemLevel, RingId};

use crate::error::CatalogError;
use crate::inventory::Inventory;

/// Hex digits per packed ring id.
const ID_WIDTH: usize = 4;
/// Hex digits per packed epic supply.
const SUPPLY_WIDTH: usize = 2;

/// Packed inventory tables for contract deployment, indexed by material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractData {
    /// Plain ring id per material.
    pub common_ids: Vec<RingId>,
    /// Plain ring max supply per material.
    pub common_max: Vec<u32>,
    /// Concatenated 4-hex-digit epic ring ids per material.
    pub epic_ids: Vec<String>,
    /// Concatenated 2-hex-digit epic supplies per material.
    pub epic_max: Vec<String>,
    /// Concatenated 4-hex-digit legendary ids per material, each id twice.
    pub legendary: Vec<String>,
    /// Concatenated 4-hex-digit mythic ids per material.
    pub mythic: Vec<String>,
}

fn push_hex(
    out: &mut String,
    ring: RingId,
    value: u32,
    width: usize,
) -> Result<(), CatalogError> {
    let bits = u32::try_from(width * 4).unwrap_or(u32::MAX);
    if bits < u32::BITS && value >> bits != 0 {
        return Err(CatalogError::ContractOverflow { ring, value, width });
    }
    // Writing to a String cannot fail.
    let _ = write!(out, "{value:0width$x}");
    Ok(())
}

impl ContractData {
    /// Pack an inventory.
    ///
    /// # Errors
    ///
    /// `ContractOverflow` if a ring id does not fit 4 hex digits or an epic
    /// supply does not fit 2.
    pub fn from_inventory(inventory: &Inventory) -> Result<Self, CatalogError> {
        let mut common_ids = BTreeMap::new();
        let mut common_max = BTreeMap::new();
        let mut epic_ids: BTreeMap<u32, String> = BTreeMap::new();
        let mut epic_max: BTreeMap<u32, String> = BTreeMap::new();
        let mut legendary: BTreeMap<u32, String> = BTreeMap::new();
        let mut mythic: BTreeMap<u32, String> = BTreeMap::new();

        for entry in inventory.entries() {
            let material = entry.spec.material;
            let ring = entry.ring_id;
            let supply = entry.max_supply();
            match entry.level() {
                Some(ItemLevel::Common) => {
                    common_ids.insert(material, ring);
                    common_max.insert(material, supply);
                }
                Some(ItemLevel::Epic) => {
                    push_hex(epic_ids.entry(material).or_default(), ring, ring.get(), ID_WIDTH)?;
                    push_hex(epic_max.entry(material).or_default(), ring, supply, SUPPLY_WIDTH)?;
                }
                Some(ItemLevel::Legendary) => {
                    let out = legendary.entry(material).or_default();
                    push_hex(out, ring, ring.get(), ID_WIDTH)?;
                    push_hex(out, ring, ring.get(), ID_WIDTH)?;
                }
                Some(ItemLevel::Mythic) => {
                    push_hex(mythic.entry(material).or_default(), ring, ring.get(), ID_WIDTH)?;
                }
                None => {}
            }
        }

        let data = Self {
            common_ids: common_ids.into_values().collect(),
            common_max: common_max.into_values().collect(),
            epic_ids: epic_ids.into_values().collect(),
            epic_max: epic_max.into_values().collect(),
            legendary: legendary.into_values().collect(),
            mythic: mythic.into_values().collect(),
        };
        tracing::debug!(
            epic = data.epic_ids.len(),
            legendary = data.legendary.len(),
            mythic = data.mythic.len(),
            "packed contract data"
        );
        Ok(data)
    }

    /// Render the Solidity assignment lines.
    pub fn render(&self) -> String {
        let join = |values: Vec<String>| values.join(", ");
        let mut out = String::new();
        let _ = writeln!(
            out,
            "commonIds = [{}]",
            join(self.common_ids.iter().map(RingId::to_string).collect())
        );
        let _ = writeln!(
            out,
            "commonMax = [{}]",
            join(self.common_max.iter().map(u32::to_string).collect())
        );
        for (label, table) in [
            ("epicIds", &self.epic_ids),
            ("epicMax", &self.epic_max),
            ("legendary", &self.legendary),
            ("mythic", &self.mythic),
        ] {
            for (index, value) in table.iter().enumerate() {
                let _ = writeln!(out, "{label}[{index}] = hex'{value}';");
            }
        }
        out
    }
}
