//! # Ring Generator — Bag to Ring Derivation
//!
//! Reproduces the pseudo-random ring roll used by Loot's `getRing` and by
//! the RingsForLoot contract, so a bag's ring can be shown without a chain
//! query.
//!
//! ## Parity Invariant
//!
//! The seed is `keccak256("RING" ++ decimal(bag_id))`: ASCII tag, decimal
//! bag id, no separator, Ethereum Keccak-256 (not NIST SHA3-256). The digest
//! is read as one big-endian 256-bit integer `value`, and every field is a
//! residue of that same `value`:
//!
//! | Field | Rule |
//! |-------|------|
//! | material | `value % 5 + 1` |
//! | greatness | `value % 21` |
//! | suffix | `value % 16 + 1` when greatness > 14 |
//! | name prefix | `value % 69 + 1` when greatness >= 19 |
//! | name suffix | `value % 18 + 1` when greatness >= 19 |
//! | aug | 1 when greatness == 20 |
//!
//! Greatness 19 names a ring without augmenting it. That asymmetry is part
//! of the contract's rarity table.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::identity::BagId;
use crate::spec::RingSpec;
use crate::tables::{MATERIALS, NAME_PREFIXES, NAME_SUFFIXES, SUFFIXES};

/// Tag hashed in front of the decimal bag id.
pub const SEED_TAG: &str = "RING";

/// Greatness above this value earns a suffix.
const SUFFIX_THRESHOLD: u32 = 14;
/// Greatness at or above this value earns a two-part name.
const NAME_THRESHOLD: u32 = 19;
/// Greatness equal to this value earns the "+1" augmentation.
const AUG_GREATNESS: u32 = 20;
/// Greatness is rolled in `0..GREATNESS_MODULUS`.
const GREATNESS_MODULUS: u32 = 21;

/// The 256-bit Keccak digest a bag's traits are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Hash the seed input for `bag`.
    pub fn for_bag(bag: BagId) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(SEED_TAG.as_bytes());
        hasher.update(bag.get().to_string().as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }

    /// The raw digest bytes, big-endian.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// `value % modulus` where `value` is the digest read as a big-endian
    /// integer. Returns `None` for a zero modulus.
    pub fn residue(&self, modulus: u32) -> Option<u32> {
        if modulus == 0 {
            return None;
        }
        let m = u64::from(modulus);
        let r = self
            .0
            .iter()
            .fold(0u64, |acc, &b| (acc * 256 + u64::from(b)) % m);
        u32::try_from(r).ok()
    }

    /// 1-based pick from a table of `len` entries, or 0 for an empty table.
    fn pick(&self, len: usize) -> u32 {
        u32::try_from(len)
            .ok()
            .and_then(|m| self.residue(m))
            .map_or(0, |r| r + 1)
    }

    /// The greatness roll, `0..=20`.
    pub fn greatness(&self) -> Greatness {
        Greatness(self.residue(GREATNESS_MODULUS).unwrap_or(0))
    }
}

/// The single roll that gates suffix, name, and augmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Greatness(pub u32);

impl Greatness {
    /// Whether the ring gets an "of X" suffix.
    pub fn has_suffix(self) -> bool {
        self.0 > SUFFIX_THRESHOLD
    }

    /// Whether the ring gets a two-part name.
    pub fn has_name(self) -> bool {
        self.0 >= NAME_THRESHOLD
    }

    /// Whether the ring gets the "+1" augmentation.
    pub fn has_aug(self) -> bool {
        self.0 == AUG_GREATNESS
    }
}

/// Derive the ring spec for a bag.
///
/// Pure and deterministic. For memoized derivation use a
/// [`RingEngine`](crate::RingEngine) with a cache.
pub fn ring_from_bag(bag: BagId) -> RingSpec {
    ring_from_seed(&Seed::for_bag(bag))
}

/// Derive a ring spec from an already computed seed.
pub fn ring_from_seed(seed: &Seed) -> RingSpec {
    let greatness = seed.greatness();
    let mut spec = RingSpec::plain(seed.pick(MATERIALS.len()));

    if greatness.has_suffix() {
        spec.suffix = seed.pick(SUFFIXES.len());
    }
    if greatness.has_name() {
        spec.name_prefix = seed.pick(NAME_PREFIXES.len());
        spec.name_suffix = seed.pick(NAME_SUFFIXES.len());
        if greatness.has_aug() {
            spec.aug = 1;
        }
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::is_valid_ring;

    #[test]
    fn test_seed_known_vector() {
        // keccak256("RING1"), cross-checked against an Ethereum keccak implementation.
        assert_eq!(
            Seed::for_bag(BagId(1)).to_hex(),
            "8a0de779c0a229bdecee929e5e0787d084f8129aed8b418eecd7ddb90a0bff44"
        );
    }

    #[test]
    fn test_seed_is_keccak_not_sha3() {
        // NIST SHA3-256 of the same input differs; make sure the empty-input
        // Keccak vector holds for the hasher we use.
        let empty = Keccak256::digest(b"");
        let hex: String = empty.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(
            hex,
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_residue_matches_small_moduli() {
        let seed = Seed([0xff; 32]);
        // 2^256 - 1 is odd, and 2^256 ≡ 1 (mod 5) so 2^256 - 1 ≡ 0 (mod 5).
        assert_eq!(seed.residue(2), Some(1));
        assert_eq!(seed.residue(5), Some(0));
        assert_eq!(seed.residue(256), Some(255));
        assert_eq!(seed.residue(0), None);
    }

    #[test]
    fn test_residue_of_small_value() {
        let mut bytes = [0u8; 32];
        bytes[30] = 0x01;
        bytes[31] = 0x2c; // 300
        let seed = Seed(bytes);
        assert_eq!(seed.residue(21), Some(300 % 21));
        assert_eq!(seed.residue(69), Some(300 % 69));
        assert_eq!(seed.greatness(), Greatness(300 % 21));
    }

    #[test]
    fn test_greatness_gates() {
        assert!(!Greatness(14).has_suffix());
        assert!(Greatness(15).has_suffix());
        assert!(!Greatness(18).has_name());
        assert!(Greatness(19).has_name());
        assert!(!Greatness(19).has_aug());
        assert!(Greatness(20).has_aug());
    }

    #[test]
    fn test_greatness_19_names_without_aug() {
        // Seed value 19: greatness 19, material 19 % 5 + 1 = 5.
        let mut bytes = [0u8; 32];
        bytes[31] = 19;
        let spec = ring_from_seed(&Seed(bytes));
        assert_eq!(spec, RingSpec::named(5, 19 % 16 + 1, 19 + 1, 1 + 1, false));
    }

    #[test]
    fn test_greatness_20_augments() {
        let mut bytes = [0u8; 32];
        bytes[31] = 20;
        let spec = ring_from_seed(&Seed(bytes));
        assert_eq!(spec, RingSpec::named(1, 20 % 16 + 1, 20 + 1, 2 + 1, true));
    }

    #[test]
    fn test_low_greatness_is_plain() {
        let mut bytes = [0u8; 32];
        bytes[31] = 14;
        assert_eq!(ring_from_seed(&Seed(bytes)), RingSpec::plain(14 % 5 + 1));
    }

    #[test]
    fn test_known_bags() {
        assert_eq!(ring_from_bag(BagId(1)), RingSpec::plain(1));
        assert_eq!(ring_from_bag(BagId(2)), RingSpec::plain(5));
        assert_eq!(ring_from_bag(BagId(3)), RingSpec::suffixed(1, 3));
        assert_eq!(ring_from_bag(BagId(7443)), RingSpec::suffixed(2, 9));
        assert_eq!(ring_from_bag(BagId(29)), RingSpec::named(3, 16, 20, 8, false));
        assert_eq!(ring_from_bag(BagId(129)), RingSpec::named(5, 15, 9, 15, true));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        for bag in 1..=50 {
            assert_eq!(ring_from_bag(BagId(bag)), ring_from_bag(BagId(bag)));
        }
    }

    #[test]
    fn test_derived_rings_are_valid() {
        for bag in 0..=500 {
            let spec = ring_from_bag(BagId(bag));
            assert!(is_valid_ring(&spec), "bag {bag} produced {spec}");
        }
    }
}
