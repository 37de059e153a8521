//! Debug assertion macros for ring buffer invariants.
//!
//! Only active in debug builds (`debug_assert!`), so there is zero overhead
//! in release builds. Used by `RingBuffer<S>`.

// =============================================================================
// Cursor Range
// =============================================================================

/// Assert that a cursor lies inside storage.
///
/// **Invariant**: `0 ≤ cursor < size`
///
/// Used in: `advance_read()`, `advance_write()` after wrapping
macro_rules! debug_assert_cursor_in_range {
    ($name:literal, $cursor:expr, $size:expr) => {
        debug_assert!(
            $cursor < $size,
            "{} cursor {} outside storage of {} bytes",
            $name,
            $cursor,
            $size
        )
    };
}

// =============================================================================
// Reserved Byte
// =============================================================================

/// Assert that the ring never becomes completely full.
///
/// **Invariant**: `used ≤ size - 1` (one byte is always reserved so that
/// `read == write` means empty)
///
/// Used in: `advance_write()` after moving the write cursor
macro_rules! debug_assert_reserved_byte {
    ($used:expr, $size:expr) => {
        debug_assert!(
            $used < $size,
            "reserved byte consumed: used {} of {} bytes",
            $used,
            $size
        )
    };
}

// =============================================================================
// Span Decomposition
// =============================================================================

/// Assert that a decomposed region covers exactly the requested length and
/// stays inside storage.
///
/// Used in: `span_region()`
macro_rules! debug_assert_region_covers {
    ($region:expr, $len:expr, $size:expr) => {
        debug_assert!(
            $region.len() == $len && $region.iter().all(|span| span.end() <= $size),
            "region {:?} does not cover {} bytes inside {} bytes of storage",
            $region,
            $len,
            $size
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_cursor_in_range;
pub(crate) use debug_assert_region_covers;
pub(crate) use debug_assert_reserved_byte;
