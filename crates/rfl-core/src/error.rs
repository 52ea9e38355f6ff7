//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Every failure in this crate is local and synchronous;
//! nothing here is retryable.

use thiserror::Error;

use crate::spec::RingSpec;

/// Top-level error type for the ring trait engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// The spec violates a ring invariant. Carries the offending spec.
    #[error("invalid ring {0}")]
    InvalidRing(RingSpec),

    /// A display name that does not correspond to any ring.
    #[error("unknown ring name: {0:?}")]
    UnknownName(String),

    /// An identifier that failed boundary validation.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Mixed-radix packing or unpacking failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Error in mixed-radix packing and unpacking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Radixes must be at least 1; a zero radix has no digits.
    #[error("radix at position {index} is zero")]
    ZeroRadix {
        /// Position of the zero radix.
        index: usize,
    },

    /// The digit list does not line up with the radix list.
    #[error("expected {expected} digits, got {actual}")]
    LengthMismatch {
        /// Number of radixes.
        expected: usize,
        /// Number of digits supplied.
        actual: usize,
    },

    /// A digit is not strictly below its radix.
    #[error("digit {digit} at position {index} does not fit radix {radix}")]
    DigitOutOfRange {
        /// Position of the digit.
        index: usize,
        /// The offending digit.
        digit: u64,
        /// The radix it was checked against.
        radix: u64,
    },

    /// The packed value or the codec capacity does not fit in a `u64`.
    #[error("packed value overflows u64")]
    Overflow,

    /// The value has leftover magnitude after all digits were extracted.
    #[error("value {value} exceeds codec capacity {capacity}")]
    ValueOutOfRange {
        /// The value being unpacked.
        value: u64,
        /// Product of all radixes.
        capacity: u64,
    },
}
