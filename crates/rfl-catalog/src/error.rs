//! # Catalog Errors

use rfl_core::{BagId, RingError, RingId};
use thiserror::Error;

/// Error building, exporting, or importing the ring catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog needs at least one bag.
    #[error("bag count must be positive")]
    EmptyRange,

    /// Ring engine failure (invalid spec or unknown name).
    #[error("ring error: {0}")]
    Ring(#[from] RingError),

    /// JSON serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An imported inventory assigns one bag to two rings.
    #[error("bag {bag} listed under more than one ring (second: {name:?})")]
    DuplicateBag {
        /// The repeated bag.
        bag: BagId,
        /// Name of the ring where it was seen again.
        name: String,
    },

    /// An imported inventory lists a bag under the wrong ring.
    #[error("bag {bag} is listed under {listed:?} but derives {derived:?}")]
    Mismatch {
        /// The bag in question.
        bag: BagId,
        /// Name it was listed under.
        listed: String,
        /// Name the engine derives.
        derived: String,
    },

    /// An imported inventory entry with no bags.
    #[error("ring {0:?} has no bags")]
    EmptyEntry(String),

    /// A value does not fit the fixed-width contract encoding.
    #[error("ring {ring} value {value} does not fit {width} hex digits")]
    ContractOverflow {
        /// The ring being encoded.
        ring: RingId,
        /// The value that overflowed.
        value: u32,
        /// Field width in hex digits.
        width: usize,
    },
}
