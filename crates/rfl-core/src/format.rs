//! # Display Names
//!
//! Canonical ring names as the Loot contract's `getRing` returns them:
//!
//! ```text
//! Gold Ring
//! Silver Ring of Anger
//! "Behemoth Tear" Titanium Ring of Vitriol
//! "Brimstone Peak" Titanium Ring of Reflection +1
//! ```
//!
//! The plural form ("Gold Rings of Power") is for UI copy only and is never
//! parsed back.

use crate::error::RingError;
use crate::spec::{is_valid_ring, RingSpec};
use crate::tables::{entry, position, MATERIALS, NAME_PREFIXES, NAME_SUFFIXES, SUFFIXES};

const AUG_MARK: &str = " +1";

/// Format a ring's display name.
///
/// # Errors
///
/// `InvalidRing` if the spec breaks any ring invariant.
pub fn ring_to_string(spec: &RingSpec, plural: bool) -> Result<String, RingError> {
    if !is_valid_ring(spec) {
        return Err(RingError::InvalidRing(*spec));
    }
    let invalid = || RingError::InvalidRing(*spec);

    let mut name = entry(MATERIALS, spec.material).ok_or_else(invalid)?.to_string();
    if plural {
        name.push('s');
    }
    if spec.suffix > 0 {
        name.push(' ');
        name.push_str(entry(SUFFIXES, spec.suffix).ok_or_else(invalid)?);
    }
    if spec.name_prefix > 0 {
        let prefix = entry(NAME_PREFIXES, spec.name_prefix).ok_or_else(invalid)?;
        let suffix = entry(NAME_SUFFIXES, spec.name_suffix).ok_or_else(invalid)?;
        name = format!("\"{prefix} {suffix}\" {name}");
    }
    if spec.aug == 1 {
        name.push_str(AUG_MARK);
    }
    Ok(name)
}

impl RingSpec {
    /// Method form of [`ring_to_string()`].
    pub fn name(&self, plural: bool) -> Result<String, RingError> {
        ring_to_string(self, plural)
    }
}

/// Recover a ring spec from its canonical singular display name.
///
/// # Errors
///
/// `UnknownName` if the text is not exactly the name of some valid ring.
pub fn parse_ring_name(name: &str) -> Result<RingSpec, RingError> {
    let unknown = || RingError::UnknownName(name.to_string());

    let (rest, aug) = match name.strip_suffix(AUG_MARK) {
        Some(rest) => (rest, 1),
        None => (name, 0),
    };

    let (name_prefix, name_suffix, rest) = match rest.strip_prefix('"') {
        Some(quoted) => {
            let (proper, rest) = quoted.split_once("\" ").ok_or_else(unknown)?;
            let (first, second) = proper.split_once(' ').ok_or_else(unknown)?;
            (
                position(NAME_PREFIXES, first).ok_or_else(unknown)?,
                position(NAME_SUFFIXES, second).ok_or_else(unknown)?,
                rest,
            )
        }
        None => (0, 0, rest),
    };

    let (material, tail) = MATERIALS
        .iter()
        .zip(1u32..)
        .find_map(|(m, i)| rest.strip_prefix(m).map(|tail| (i, tail)))
        .ok_or_else(unknown)?;

    let suffix = if tail.is_empty() {
        0
    } else {
        let text = tail.strip_prefix(' ').ok_or_else(unknown)?;
        position(SUFFIXES, text).ok_or_else(unknown)?
    };

    let spec = RingSpec {
        material,
        suffix,
        name_prefix,
        name_suffix,
        aug,
    };
    if !is_valid_ring(&spec) {
        return Err(unknown());
    }
    Ok(spec)
}
