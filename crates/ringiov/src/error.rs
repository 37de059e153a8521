//! Error types for ring buffer construction and checked commits.

use thiserror::Error;

/// Errors that can occur when building a ring buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// The storage region is empty.
    #[error("ring storage must not be empty")]
    ZeroSize,

    /// The storage length is not a power of two, so index masking is impossible.
    #[error("ring storage size {size} is not a power of two")]
    NotPowerOfTwo {
        /// Length of the rejected storage region.
        size: usize,
    },

    /// `ring_bits` exceeds the width of `usize`.
    #[error("ring_bits {ring_bits} does not fit in usize")]
    RingBitsTooLarge {
        /// The rejected bit count.
        ring_bits: u8,
    },
}

/// Error returned when trying to commit more bytes than the ring can account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot commit {attempted} bytes, only {available} available")]
pub struct CommitError {
    /// Number of bytes attempted to commit.
    pub attempted: usize,
    /// Number of bytes that could be committed (`free()` or `used()`).
    pub available: usize,
}
