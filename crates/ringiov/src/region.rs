//! Scatter/gather descriptors over ring storage.
//!
//! A [`Region`] is what every request operation on
//! [`RingBuffer`](crate::RingBuffer) hands back: zero, one, or two
//! [`Span`]s, listed in logical order. Two spans appear only when the
//! logical range crosses the physical end of storage, in which case span 0
//! runs to the end of storage and span 1 starts at offset 0.
//!
//! Regions carry offsets, not pointers. Resolve them against the ring with
//! [`RingBuffer::slices`](crate::RingBuffer::slices) or
//! [`RingBuffer::io_slices`](crate::RingBuffer::io_slices).

use std::ops::Range;

/// A contiguous run of bytes inside ring storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the first byte from the start of storage.
    pub offset: usize,
    /// Number of bytes in the span.
    pub len: usize,
}

impl Span {
    /// Creates a span.
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// One past the last byte of the span.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The span as a storage index range.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// Up to two storage spans describing one logical byte range.
///
/// Never contains a zero-length span: a zero-byte region has no spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Region {
    spans: [Span; 2],
    count: u8,
}

impl Region {
    /// The region with no spans.
    pub const EMPTY: Self = Self {
        spans: [Span::new(0, 0); 2],
        count: 0,
    };

    /// Builds a region from its physical parts, dropping empty spans.
    pub(crate) fn from_parts(first: Span, second: Span) -> Self {
        match (first.len, second.len) {
            (0, 0) => Self::EMPTY,
            (_, 0) => Self {
                spans: [first, Span::default()],
                count: 1,
            },
            (0, _) => Self {
                spans: [second, Span::default()],
                count: 1,
            },
            _ => Self {
                spans: [first, second],
                count: 2,
            },
        }
    }

    /// The spans in logical order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans[..self.count as usize]
    }

    /// Number of spans (0, 1 or 2).
    #[inline]
    pub fn span_count(&self) -> usize {
        self.count as usize
    }

    /// Total bytes covered by the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans().iter().map(|span| span.len).sum()
    }

    /// Returns true if the region covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the region crosses the end of storage.
    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.count == 2
    }

    /// The span where the region starts.
    #[inline]
    pub fn first(&self) -> Option<Span> {
        self.spans().first().copied()
    }

    /// The wrapped continuation at the start of storage, if any.
    #[inline]
    pub fn second(&self) -> Option<Span> {
        self.spans().get(1).copied()
    }

    /// Iterates over the spans in logical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans().iter()
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
