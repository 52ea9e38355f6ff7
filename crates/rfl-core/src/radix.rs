//! # Mixed-Radix Codec
//!
//! Packs a tuple of bounded integers into one integer using a per-position
//! radix, the way a clock packs hours, minutes and seconds. Position 0 is the
//! least significant digit.
//!
//! Packing iterates from the last position to the first
//! (`acc = acc * radix[i] + digit[i]`); unpacking iterates from the first
//! (`digit[i] = acc % radix[i]; acc /= radix[i]`). This matches the layout the
//! RingsForLoot contract uses for its own packed ring data.
//!
//! Unlike a bare arithmetic loop, every entry point checks its inputs: zero
//! radixes, digit/radix length mismatches, digits that do not fit their
//! radix, and `u64` overflow are errors.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A validated list of radixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MixedRadix {
    radixes: Vec<u64>,
    capacity: u64,
}

impl MixedRadix {
    /// Build a codec from a radix list.
    ///
    /// # Errors
    ///
    /// `ZeroRadix` if any radix is 0; `Overflow` if the product of all
    /// radixes does not fit in a `u64`.
    pub fn new(radixes: impl Into<Vec<u64>>) -> Result<Self, CodecError> {
        let radixes = radixes.into();
        let mut capacity: u64 = 1;
        for (index, &radix) in radixes.iter().enumerate() {
            if radix == 0 {
                return Err(CodecError::ZeroRadix { index });
            }
            capacity = capacity.checked_mul(radix).ok_or(CodecError::Overflow)?;
        }
        Ok(Self { radixes, capacity })
    }

    /// The radixes, least significant first.
    pub fn radixes(&self) -> &[u64] {
        &self.radixes
    }

    /// Number of distinct values this codec can represent: the product of
    /// all radixes. Every packed value is strictly below it.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Pack digits into a single value.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if `digits` and the radix list differ in length;
    /// `DigitOutOfRange` if a digit is not below its radix.
    pub fn pack(&self, digits: &[u64]) -> Result<u64, CodecError> {
        if digits.len() != self.radixes.len() {
            return Err(CodecError::LengthMismatch {
                expected: self.radixes.len(),
                actual: digits.len(),
            });
        }
        let mut value: u64 = 0;
        for (index, (&radix, &digit)) in self.radixes.iter().zip(digits).enumerate().rev() {
            if digit >= radix {
                return Err(CodecError::DigitOutOfRange {
                    index,
                    digit,
                    radix,
                });
            }
            // Cannot overflow: value < product of the remaining radixes.
            value = value * radix + digit;
        }
        Ok(value)
    }

    /// Unpack a value into digits, discarding any magnitude beyond
    /// [`capacity()`](Self::capacity).
    pub fn unpack(&self, value: u64) -> Vec<u64> {
        let mut acc = value;
        self.radixes
            .iter()
            .map(|&radix| {
                let digit = acc % radix;
                acc /= radix;
                digit
            })
            .collect()
    }

    /// Unpack a value, rejecting values at or above the capacity.
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` if `value >= capacity()`.
    pub fn unpack_exact(&self, value: u64) -> Result<Vec<u64>, CodecError> {
        if value >= self.capacity {
            return Err(CodecError::ValueOutOfRange {
                value,
                capacity: self.capacity,
            });
        }
        Ok(self.unpack(value))
    }
}

/// Pack `values` with the given radixes in one call.
///
/// # Errors
///
/// Any error from [`MixedRadix::new()`] or [`MixedRadix::pack()`].
pub fn superpack(radixes: &[u64], values: &[u64]) -> Result<u64, CodecError> {
    MixedRadix::new(radixes)?.pack(values)
}

/// Unpack `value` with the given radixes in one call.
///
/// # Errors
///
/// Any error from [`MixedRadix::new()`].
pub fn superunpack(value: u64, radixes: &[u64]) -> Result<Vec<u64>, CodecError> {
    Ok(MixedRadix::new(radixes)?.unpack(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_example() {
        // seconds, minutes, hours
        let codec = MixedRadix::new(vec![60, 60, 24]).unwrap();
        assert_eq!(codec.capacity(), 86_400);
        let value = codec.pack(&[5, 4, 3]).unwrap();
        assert_eq!(value, 3 * 3600 + 4 * 60 + 5);
        assert_eq!(codec.unpack(value), vec![5, 4, 3]);
    }

    #[test]
    fn test_first_digit_is_least_significant() {
        assert_eq!(superpack(&[6, 17], &[1, 0]).unwrap(), 1);
        assert_eq!(superpack(&[6, 17], &[0, 1]).unwrap(), 6);
    }

    #[test]
    fn test_empty_radix_list() {
        let codec = MixedRadix::new(Vec::new()).unwrap();
        assert_eq!(codec.capacity(), 1);
        assert_eq!(codec.pack(&[]).unwrap(), 0);
        assert!(codec.unpack(0).is_empty());
    }

    #[test]
    fn test_zero_radix_rejected() {
        assert_eq!(
            MixedRadix::new(vec![3, 0, 2]),
            Err(CodecError::ZeroRadix { index: 1 })
        );
        assert!(superunpack(10, &[0]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert_eq!(
            superpack(&[2, 2], &[1]),
            Err(CodecError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_digit_out_of_range_rejected() {
        assert_eq!(
            superpack(&[6, 17], &[6, 0]),
            Err(CodecError::DigitOutOfRange {
                index: 0,
                digit: 6,
                radix: 6
            })
        );
    }

    #[test]
    fn test_capacity_overflow_rejected() {
        assert_eq!(
            MixedRadix::new(vec![u64::MAX, 2]),
            Err(CodecError::Overflow)
        );
    }

    #[test]
    fn test_unpack_discards_excess_but_exact_rejects() {
        let codec = MixedRadix::new(vec![2, 3]).unwrap();
        assert_eq!(codec.unpack(7), vec![1, 0]);
        assert_eq!(
            codec.unpack_exact(6),
            Err(CodecError::ValueOutOfRange {
                value: 6,
                capacity: 6
            })
        );
        assert_eq!(codec.unpack_exact(5).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_max_value_packs_to_capacity_minus_one() {
        let codec = MixedRadix::new(vec![6, 17, 70, 19, 2]).unwrap();
        let top = codec.pack(&[5, 16, 69, 18, 1]).unwrap();
        assert_eq!(top, codec.capacity() - 1);
    }
}
