//! # Contract Parity Tests
//!
//! These tests pin the engine to values produced by the Loot and
//! RingsForLoot contracts. If any of them fail, the front-end would show
//! rings that the contract will not mint.
//!
//! The expected names come from `Loot.getRing(bagId)`; encodings come from
//! the contract's packed ring data.

use rfl_core::{
    decode_ring, encode_ring, is_valid_ring, ring_from_bag, ring_to_string, BagId, RingEngine,
    MemoryCache, RingCache, RingSpec,
};

const BAG_COUNT: u32 = 8000;

fn name_of(bag: u32) -> String {
    ring_to_string(&ring_from_bag(BagId(bag)), false).expect("derived rings are valid")
}

// ---------------------------------------------------------------------------
// Known names
// ---------------------------------------------------------------------------

#[test]
fn test_loot_get_ring_names() {
    let cases = [
        (1, "Gold Ring"),
        (2, "Titanium Ring"),
        (3, "Gold Ring of Titans"),
        (1111, "Silver Ring"),
        (6726, "Silver Ring of Anger"),
        (7443, "Silver Ring of Anger"),
        (8000, "Bronze Ring"),
        (29, "\"Dragon Glow\" Bronze Ring of the Twins"),
        (34, "\"Carrion Whisper\" Gold Ring of Enlightenment"),
        (129, "\"Brimstone Peak\" Titanium Ring of Reflection +1"),
        (164, "\"Woe Bender\" Silver Ring of Anger +1"),
        (191, "\"Cataclysm Grasp\" Platinum Ring of Skill +1"),
        (537, "\"Behemoth Tear\" Titanium Ring of Detection"),
        (7455, "\"Behemoth Tear\" Titanium Ring of Vitriol"),
    ];
    for (bag, expected) in cases {
        assert_eq!(name_of(bag), expected, "bagId = {bag}");
    }
}

#[test]
fn test_plural_name() {
    let spec = ring_from_bag(BagId(164));
    assert_eq!(
        ring_to_string(&spec, true).unwrap(),
        "\"Woe Bender\" Silver Rings of Anger +1"
    );
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

#[test]
fn test_known_packed_values() {
    assert_eq!(encode_ring(&ring_from_bag(BagId(7443))).unwrap(), 56);
    assert_eq!(encode_ring(&ring_from_bag(BagId(164))).unwrap(), 206_708);
    assert_eq!(encode_ring(&ring_from_bag(BagId(191))).unwrap(), 179_752);
}

#[test]
fn test_roundtrip_every_bag() {
    let mut max = 0;
    for bag in 1..=BAG_COUNT {
        let spec = ring_from_bag(BagId(bag));
        assert!(is_valid_ring(&spec), "bagId = {bag}");
        let value = encode_ring(&spec).unwrap();
        max = max.max(value);
        assert_eq!(decode_ring(value), spec, "bagId = {bag}");
    }
    assert_eq!(max, 271_292);
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

#[test]
fn test_trait_distribution_over_all_bags() {
    let specs: Vec<RingSpec> = (1..=BAG_COUNT).map(|b| ring_from_bag(BagId(b))).collect();
    let suffixed = specs.iter().filter(|s| s.suffix > 0).count();
    let named = specs.iter().filter(|s| s.is_named()).count();
    let augmented = specs.iter().filter(|s| s.is_augmented()).count();
    assert_eq!(suffixed, 2288);
    assert_eq!(named, 770);
    assert_eq!(augmented, 388);
}

#[test]
fn test_cached_engine_matches_over_all_bags() {
    let engine = RingEngine::with_cache(MemoryCache::new());
    for bag in 1..=BAG_COUNT {
        assert_eq!(engine.ring(BagId(bag)), ring_from_bag(BagId(bag)));
    }
    assert_eq!(engine.cache().len(), BAG_COUNT as usize);
}
