//! # Inventory Export
//!
//! Serializes the inventory as a JSON object mapping each ring name to its
//! bag ids, keys in ring-id order:
//!
//! ```json
//! {"Gold Ring":[1,14,...],"Titanium Ring":[2,...],"Gold Ring of Titans":[3,...]}
//! ```
//!
//! The front-end embeds this object as `ALL_RINGS_DATA`. Exports are
//! byte-deterministic, so their SHA-256 digest pins a checked-in copy.

use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use sha2::{Digest, Sha256};

use rfl_core::BagId;

use crate::error::CatalogError;
use crate::inventory::Inventory;

/// Name of the constant the front-end module exports.
pub const MODULE_CONSTANT: &str = "ALL_RINGS_DATA";

/// Serializable view of an inventory as a name → bag ids map.
#[derive(Debug, Clone, Copy)]
pub struct InventoryExport<'a>(pub &'a Inventory);

impl Serialize for InventoryExport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.0.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for entry in entries {
            map.serialize_entry(&entry.name, &entry.bag_ids)?;
        }
        map.end()
    }
}

impl InventoryExport<'_> {
    /// Compact JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// A TypeScript module exporting the inventory as a constant.
    pub fn to_module_source(&self) -> Result<String, CatalogError> {
        let json = serde_json::to_string(self)?;
        Ok(format!("export const {MODULE_CONSTANT} = {json}"))
    }

    /// SHA-256 digest of the compact JSON bytes.
    pub fn digest(&self) -> Result<String, CatalogError> {
        Ok(content_digest(&self.to_json()?))
    }
}

impl Inventory {
    /// Parse an exported name → bag ids JSON object.
    ///
    /// # Errors
    ///
    /// `Serialization` for malformed JSON, plus every error of
    /// [`Inventory::from_named_bags()`].
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let named: HashMap<String, Vec<BagId>> = serde_json::from_slice(bytes)?;
        Inventory::from_named_bags(named)
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn content_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
