//! # rfl-core — Ring Trait Engine
//!
//! This crate is the bedrock of the Rings for Loot workspace. It recomputes,
//! off-chain, everything the RingsForLoot contract derives about a ring from
//! a Loot bag: the trait fields, their compact encoding, the display name,
//! and the rarity tier. Every other crate in the workspace depends on
//! `rfl-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Bit-for-bit parity with the contract.** Derivation hashes
//!    `"RING" ++ decimal(bag_id)` with Keccak-256 and reduces the 256-bit
//!    digest with the exact moduli the contract uses. See [`generator`].
//!
//! 2. **Validation before output.** [`encode_ring()`] and [`ring_to_string()`]
//!    refuse invalid specs with [`RingError::InvalidRing`]. Nothing formats or
//!    packs garbage.
//!
//! 3. **Reusable mixed-radix codec.** [`MixedRadix`] is generic over any
//!    radix list; the ring encoding is one instance of it.
//!
//! 4. **Explicit caches.** Memoization is an injected [`RingCache`] owned by a
//!    [`RingEngine`], never process-wide state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rfl-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod cache;
pub mod codec;
pub mod engine;
pub mod error;
pub mod format;
pub mod generator;
pub mod identity;
pub mod radix;
pub mod rarity;
pub mod spec;
pub mod tables;

// Re-export primary types for ergonomic imports.
pub use cache::{MemoryCache, NoCache, RingCache};
pub use codec::{decode_ring, decode_valid_ring, encode_ring, RING_RADIXES};
pub use engine::RingEngine;
pub use error::{CodecError, RingError};
pub use format::{parse_ring_name, ring_to_string};
pub use generator::{ring_from_bag, ring_from_seed, Greatness, Seed, SEED_TAG};
pub use identity::{BagId, ChainId, RingId};
pub use radix::{superpack, superunpack, MixedRadix};
pub use rarity::{ring_level_from_supply, ring_max_supply, ItemLevel, SupplyTable};
pub use spec::{is_valid_ring, RingSpec};
