//! # Ring Spec — Trait Fields and Validity Rules
//!
//! `RingSpec` is the in-memory form of a ring: five small integers, each a
//! 1-based index into a fixed table (or a flag), with 0 meaning "absent".
//!
//! A spec is plain data. It can hold arbitrary field values, for example
//! after decoding untrusted on-chain data, so validity is a separate
//! predicate: [`is_valid_ring()`]. Every operation that produces output from
//! a spec (encoding, formatting) checks it first.
//!
//! ## Invariants
//!
//! Rarity tiers are strictly nested: plain < suffixed < named < named+aug.
//!
//! - `material` is in range for [`MATERIALS`].
//! - `suffix == 0` implies no name and no augmentation.
//! - `name_prefix` and `name_suffix` are both set or both unset.
//! - `aug` is 0 or 1, and 1 only on a named ring.

use serde::{Deserialize, Serialize};

use crate::tables::{in_range, MATERIALS, NAME_PREFIXES, NAME_SUFFIXES, SUFFIXES};

/// The trait fields of one ring.
///
/// Serializes with camelCase keys (`namePrefix`, `nameSuffix`) so JSON
/// output matches the shape consumed by the web front-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSpec {
    /// 1-based index into [`MATERIALS`]. Never 0 on a valid ring.
    pub material: u32,
    /// 1-based index into [`SUFFIXES`], or 0.
    pub suffix: u32,
    /// 1-based index into [`NAME_PREFIXES`], or 0.
    pub name_prefix: u32,
    /// 1-based index into [`NAME_SUFFIXES`], or 0.
    pub name_suffix: u32,
    /// The "+1" augmentation flag: 0 or 1.
    pub aug: u32,
}

impl RingSpec {
    /// A plain ring of the given material.
    pub fn plain(material: u32) -> Self {
        Self {
            material,
            ..Self::default()
        }
    }

    /// A ring with a material and an "of X" suffix.
    pub fn suffixed(material: u32, suffix: u32) -> Self {
        Self {
            material,
            suffix,
            ..Self::default()
        }
    }

    /// A named ring. `aug` selects the "+1" variant.
    pub fn named(material: u32, suffix: u32, name_prefix: u32, name_suffix: u32, aug: bool) -> Self {
        Self {
            material,
            suffix,
            name_prefix,
            name_suffix,
            aug: u32::from(aug),
        }
    }

    /// The fields in codec order: material, suffix, name prefix, name suffix, aug.
    pub fn fields(&self) -> [u32; 5] {
        [
            self.material,
            self.suffix,
            self.name_prefix,
            self.name_suffix,
            self.aug,
        ]
    }

    /// Rebuild a spec from fields in codec order.
    pub fn from_fields(fields: [u32; 5]) -> Self {
        let [material, suffix, name_prefix, name_suffix, aug] = fields;
        Self {
            material,
            suffix,
            name_prefix,
            name_suffix,
            aug,
        }
    }

    /// Whether this spec satisfies every ring invariant.
    pub fn is_valid(&self) -> bool {
        is_valid_ring(self)
    }

    /// Whether the ring carries a two-part proper name.
    pub fn is_named(&self) -> bool {
        self.name_prefix != 0 && self.name_suffix != 0
    }

    /// Whether the ring has the "+1" augmentation.
    pub fn is_augmented(&self) -> bool {
        self.aug == 1
    }
}

impl std::fmt::Display for RingSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{material: {}, suffix: {}, namePrefix: {}, nameSuffix: {}, aug: {}}}",
            self.material, self.suffix, self.name_prefix, self.name_suffix, self.aug
        )
    }
}

/// Check every ring invariant.
///
/// With a non-zero suffix, the name fields and `aug` must either all be 0
/// or both name fields must be in range with `aug` in `{0, 1}`. A suffixed
/// ring with `aug == 1` but no name is therefore rejected.
pub fn is_valid_ring(spec: &RingSpec) -> bool {
    if !in_range(MATERIALS, spec.material) {
        return false;
    }
    if spec.suffix == 0 {
        return spec.name_prefix == 0 && spec.name_suffix == 0 && spec.aug == 0;
    }
    if !in_range(SUFFIXES, spec.suffix) {
        return false;
    }
    if spec.name_prefix == 0 && spec.name_suffix == 0 && spec.aug == 0 {
        return true;
    }

    in_range(NAME_PREFIXES, spec.name_prefix)
        && in_range(NAME_SUFFIXES, spec.name_suffix)
        && (spec.aug == 0 || spec.aug == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ring_valid() {
        for material in 1..=5 {
            assert!(is_valid_ring(&RingSpec::plain(material)));
        }
    }

    #[test]
    fn test_material_out_of_range() {
        assert!(!is_valid_ring(&RingSpec::plain(0)));
        assert!(!is_valid_ring(&RingSpec::plain(6)));
        assert!(!is_valid_ring(&RingSpec::suffixed(6, 1)));
    }

    #[test]
    fn test_no_suffix_rejects_name_and_aug() {
        let mut spec = RingSpec::plain(1);
        spec.name_prefix = 1;
        assert!(!is_valid_ring(&spec));

        let mut spec = RingSpec::plain(1);
        spec.name_suffix = 1;
        assert!(!is_valid_ring(&spec));

        let mut spec = RingSpec::plain(1);
        spec.aug = 1;
        assert!(!is_valid_ring(&spec));
    }

    #[test]
    fn test_suffix_without_name_valid() {
        assert!(is_valid_ring(&RingSpec::suffixed(2, 9)));
        assert!(is_valid_ring(&RingSpec::suffixed(5, 16)));
        assert!(!is_valid_ring(&RingSpec::suffixed(5, 17)));
    }

    #[test]
    fn test_suffix_with_aug_but_no_name_rejected() {
        let mut spec = RingSpec::suffixed(1, 1);
        spec.aug = 1;
        assert!(!is_valid_ring(&spec));
    }

    #[test]
    fn test_half_name_rejected() {
        let mut spec = RingSpec::suffixed(1, 1);
        spec.name_prefix = 5;
        assert!(!is_valid_ring(&spec));

        let mut spec = RingSpec::suffixed(1, 1);
        spec.name_suffix = 14;
        assert!(!is_valid_ring(&spec));
    }

    #[test]
    fn test_named_ring_bounds() {
        assert!(is_valid_ring(&RingSpec::named(5, 12, 5, 14, false)));
        assert!(is_valid_ring(&RingSpec::named(5, 12, 69, 18, true)));
        assert!(!is_valid_ring(&RingSpec::named(5, 12, 70, 18, false)));
        assert!(!is_valid_ring(&RingSpec::named(5, 12, 69, 19, false)));

        let mut spec = RingSpec::named(5, 12, 5, 14, false);
        spec.aug = 2;
        assert!(!is_valid_ring(&spec));
    }

    #[test]
    fn test_fields_roundtrip() {
        let spec = RingSpec::named(4, 4, 12, 6, true);
        assert_eq!(spec.fields(), [4, 4, 12, 6, 1]);
        assert_eq!(RingSpec::from_fields(spec.fields()), spec);
        assert!(spec.is_named());
        assert!(spec.is_augmented());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_value(RingSpec::named(5, 12, 5, 14, false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "material": 5, "suffix": 12, "namePrefix": 5, "nameSuffix": 14, "aug": 0
            })
        );
    }

    #[test]
    fn test_display_lists_fields() {
        let spec = RingSpec::plain(1);
        assert_eq!(
            spec.to_string(),
            "{material: 1, suffix: 0, namePrefix: 0, nameSuffix: 0, aug: 0}"
        );
    }
}
