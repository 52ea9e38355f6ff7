//! # Ring Encoding
//!
//! Packs a ring spec into one integer with the [`MixedRadix`] codec. The
//! radix of each field is its table length plus one (to leave room for 0)
//! and 2 for `aug`, in field order: material, suffix, name prefix, name
//! suffix, aug. The same layout is used by the contract, so encoded values
//! can be compared with on-chain data directly.

use crate::error::RingError;
use crate::radix::MixedRadix;
use crate::spec::{is_valid_ring, RingSpec};
use crate::tables::{MATERIALS, NAME_PREFIXES, NAME_SUFFIXES, SUFFIXES};

/// Field radixes in codec order: `[6, 17, 70, 19, 2]`.
pub const RING_RADIXES: [u64; 5] = [
    MATERIALS.len() as u64 + 1,
    SUFFIXES.len() as u64 + 1,
    NAME_PREFIXES.len() as u64 + 1,
    NAME_SUFFIXES.len() as u64 + 1,
    2,
];

fn ring_codec() -> Result<MixedRadix, RingError> {
    Ok(MixedRadix::new(RING_RADIXES)?)
}

/// Encode a valid ring spec.
///
/// # Errors
///
/// `InvalidRing` if the spec breaks any ring invariant. The spec is checked
/// before packing.
pub fn encode_ring(spec: &RingSpec) -> Result<u64, RingError> {
    if !is_valid_ring(spec) {
        return Err(RingError::InvalidRing(*spec));
    }
    let digits = spec.fields().map(u64::from);
    Ok(ring_codec()?.pack(&digits)?)
}

/// Decode a value into raw ring fields.
///
/// Does not validate: every value decodes to some field tuple, which may
/// break ring invariants (e.g. `0` decodes to material 0). Values beyond the
/// codec capacity wrap, matching plain mixed-radix arithmetic. Use
/// [`decode_valid_ring()`] for untrusted input.
pub fn decode_ring(value: u64) -> RingSpec {
    let mut fields = [0u32; 5];
    let mut acc = value;
    for (field, radix) in fields.iter_mut().zip(RING_RADIXES) {
        // Each digit is below its radix, which is at most 70.
        *field = (acc % radix) as u32;
        acc /= radix;
    }
    RingSpec::from_fields(fields)
}

/// Decode a value and require a valid ring.
///
/// # Errors
///
/// `Codec(ValueOutOfRange)` if the value exceeds the codec capacity;
/// `InvalidRing` if the decoded fields break a ring invariant.
pub fn decode_valid_ring(value: u64) -> Result<RingSpec, RingError> {
    ring_codec()?.unpack_exact(value)?;
    let spec = decode_ring(value);
    if !is_valid_ring(&spec) {
        return Err(RingError::InvalidRing(spec));
    }
    Ok(spec)
}
