use crate::invariants::{
    debug_assert_cursor_in_range, debug_assert_region_covers, debug_assert_reserved_byte,
};
use crate::search::{find_byte, find_sequence};
use crate::{CommitError, Config, Metrics, MetricsSnapshot, Region, RingError, Span};
use std::fmt;
use std::io::{self, IoSlice, IoSliceMut, Read, Write};

// =============================================================================
// CURSOR ARITHMETIC
// =============================================================================
//
// `read` and `write` are physical indices in `[0, size)`. Because `size` is a
// power of two, wrapping is a mask instead of a modulo:
//
//   used = (write - read) & (size - 1)      (wrapping subtraction)
//   free = size - used - 1
//
// One byte is always left free, so `read == write` unambiguously means
// empty and `used` never reaches `size`.
//
// Every logical range `[start, start + len)` is turned into at most two
// physical spans by `span_region()`:
//
//   span 0: [start, min(start + len, size))
//   span 1: [0, start + len - size)          only when the range wraps
//
// All request operations are thin wrappers over that helper.
//
// =============================================================================

/// Outcome of [`RingBuffer::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// The buffered prefix equals the pattern.
    Equal,
    /// The buffered prefix differs from the pattern.
    NotEqual,
    /// Fewer bytes are buffered than the pattern is long; no verdict yet.
    InsufficientData,
}

/// Fixed-capacity byte ring with zero-copy scatter/gather regions.
///
/// The ring holds a storage handle `S` and two cursors. `S` decides who
/// owns the bytes: `Box<[u8]>` (the default, allocated by
/// [`RingBuffer::new`]), `Vec<u8>`, or a caller-owned `&mut [u8]`.
///
/// Producers call [`request_write_region`](Self::request_write_region),
/// fill the returned spans, then [`commit_write`](Self::commit_write).
/// Consumers call one of the `request_read_*` operations, consume the bytes,
/// then [`commit_read`](Self::commit_read). [`write`](Self::write) and
/// [`read`](Self::read) do the copy and the commit in one step.
///
/// Nothing here blocks or fails for lack of space or data: writes and reads
/// are short, requests return empty regions, searches return `None`.
pub struct RingBuffer<S = Box<[u8]>> {
    storage: S,
    /// `size - 1`
    mask: usize,
    read: usize,
    write: usize,
    enable_metrics: bool,
    metrics: Metrics,
}

impl RingBuffer<Box<[u8]>> {
    /// Creates a ring with freshly allocated, zeroed storage of
    /// `config.capacity()` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `config.ring_bits` exceeds [`MAX_RING_BITS`](crate::MAX_RING_BITS).
    pub fn new(config: Config) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid ring configuration: {err}");
        }
        let storage = vec![0u8; config.capacity()].into_boxed_slice();
        tracing::debug!(size = config.capacity(), "allocated ring storage");
        Self::from_parts(storage, config)
    }
}

impl<S: AsRef<[u8]>> RingBuffer<S> {
    /// Wraps caller-supplied storage. Metrics are disabled.
    ///
    /// Fails if the storage is empty or its length is not a power of two.
    pub fn from_storage(storage: S) -> Result<Self, RingError> {
        Self::from_storage_with_metrics(storage, false)
    }

    /// Wraps caller-supplied storage, optionally collecting metrics.
    pub fn from_storage_with_metrics(storage: S, enable_metrics: bool) -> Result<Self, RingError> {
        let config = Config::for_size(storage.as_ref().len(), enable_metrics)?;
        tracing::debug!(size = config.capacity(), "wrapped ring storage");
        Ok(Self::from_parts(storage, config))
    }

    fn from_parts(storage: S, config: Config) -> Self {
        Self {
            storage,
            mask: config.mask(),
            read: 0,
            write: 0,
            enable_metrics: config.enable_metrics,
            metrics: Metrics::new(),
        }
    }

    // ---------------------------------------------------------------------
    // CONSTANTS & STATUS
    // ---------------------------------------------------------------------

    /// Returns the storage size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.mask + 1
    }

    /// Returns the maximum number of bytes the ring can hold (`size - 1`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask
    }

    /// Returns the number of buffered bytes.
    #[inline]
    pub fn used(&self) -> usize {
        self.write.wrapping_sub(self.read) & self.mask
    }

    /// Returns the number of bytes that can still be written.
    #[inline]
    pub fn free(&self) -> usize {
        self.mask - self.used()
    }

    /// Returns true if nothing is buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Returns true if no byte can be written.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free() == 0
    }

    /// Physical index of the next byte to read.
    #[inline]
    pub fn read_cursor(&self) -> usize {
        self.read
    }

    /// Physical index of the next byte to write.
    #[inline]
    pub fn write_cursor(&self) -> usize {
        self.write
    }

    /// Get a snapshot of metrics if enabled.
    pub fn metrics(&self) -> MetricsSnapshot {
        if self.enable_metrics {
            self.metrics.snapshot()
        } else {
            MetricsSnapshot::default()
        }
    }

    /// Releases the storage handle.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Drops all buffered bytes and rewinds both cursors to 0.
    pub fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
    }

    /// Internal: decompose the logical range `[start, start + len)` into
    /// physical spans. `start` must be a cursor and `len < size`.
    fn span_region(&self, start: usize, len: usize) -> Region {
        let size = self.size();
        let first = len.min(size - start);
        let region = Region::from_parts(Span::new(start, first), Span::new(0, len - first));
        debug_assert_region_covers!(region, len, size);
        region
    }

    // ---------------------------------------------------------------------
    // REGION ACCESS
    // ---------------------------------------------------------------------

    /// Resolves a region into its byte slices, in logical order.
    ///
    /// The second slice is empty unless the region wraps.
    ///
    /// # Panics
    ///
    /// Panics if the region does not fit this ring's storage.
    pub fn slices(&self, region: &Region) -> (&[u8], &[u8]) {
        let storage = self.storage.as_ref();
        let empty: &[u8] = &[];
        let first = region.first().map_or(empty, |span| &storage[span.range()]);
        let second = region.second().map_or(empty, |span| &storage[span.range()]);
        (first, second)
    }

    /// Resolves a region into `IoSlice`s for `write_vectored`.
    pub fn io_slices(&self, region: &Region) -> [IoSlice<'_>; 2] {
        let (first, second) = self.slices(region);
        [IoSlice::new(first), IoSlice::new(second)]
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Describes all free space starting at the write cursor.
    ///
    /// Empty when the ring is full. Calling this repeatedly without a
    /// commit returns the same region.
    pub fn request_write_region(&self) -> Region {
        self.span_region(self.write, self.free())
    }

    /// Advances the write cursor by `min(n, free())` and returns that count.
    ///
    /// The caller promises the committed bytes were actually written into
    /// the region from [`request_write_region`](Self::request_write_region);
    /// committing unwritten bytes publishes stale data and is not detected.
    pub fn commit_write(&mut self, n: usize) -> usize {
        let committed = n.min(self.free());
        self.finish_write(committed, n);
        committed
    }

    /// Commits exactly `n` bytes, or nothing if fewer than `n` are free.
    pub fn try_commit_write(&mut self, n: usize) -> Result<(), CommitError> {
        let available = self.free();
        if n > available {
            return Err(CommitError {
                attempted: n,
                available,
            });
        }
        self.finish_write(n, n);
        Ok(())
    }

    fn finish_write(&mut self, committed: usize, requested: usize) {
        self.write = self.write.wrapping_add(committed) & self.mask;
        debug_assert_cursor_in_range!("write", self.write, self.size());
        debug_assert_reserved_byte!(self.used(), self.size());

        if committed < requested {
            tracing::trace!(requested, committed, "write saturated at free space");
        }
        if self.enable_metrics {
            self.metrics.record_write(committed, requested);
        }
    }

    // ---------------------------------------------------------------------
    // CONSUMER API
    // ---------------------------------------------------------------------

    /// Describes all buffered bytes starting at the read cursor.
    ///
    /// Empty when the ring is empty.
    pub fn request_read_region(&self) -> Region {
        self.span_region(self.read, self.used())
    }

    /// Describes exactly the next `len` buffered bytes.
    ///
    /// All or nothing: returns an empty region, never a shorter one, while
    /// fewer than `len` bytes are buffered.
    pub fn request_read_exact(&self, len: usize) -> Region {
        if len > self.used() {
            return Region::EMPTY;
        }
        self.span_region(self.read, len)
    }

    /// Describes the buffered bytes before the first `delim`.
    ///
    /// The delimiter itself is not part of the region. Returns `None` if
    /// `delim` is not buffered; returns an empty region if the next byte is
    /// the delimiter.
    pub fn request_read_until_byte(&self, delim: u8) -> Option<Region> {
        let (tail, head) = self.slices(&self.request_read_region());
        find_byte(tail, head, delim).map(|pos| self.span_region(self.read, pos))
    }

    /// Describes the buffered bytes before the first occurrence of
    /// `pattern`, which may straddle the end of storage.
    ///
    /// The matched bytes are not part of the region. Returns `None` if
    /// `pattern` is empty, longer than [`used`](Self::used), or not buffered.
    pub fn request_read_until_sequence(&self, pattern: &[u8]) -> Option<Region> {
        if pattern.len() > self.used() {
            return None;
        }
        let (tail, head) = self.slices(&self.request_read_region());
        find_sequence(tail, head, pattern).map(|pos| self.span_region(self.read, pos))
    }

    /// Compares the next `pattern.len()` buffered bytes with `pattern`
    /// without consuming them.
    ///
    /// An empty pattern is always [`Comparison::Equal`].
    pub fn compare(&self, pattern: &[u8]) -> Comparison {
        if pattern.len() > self.used() {
            return Comparison::InsufficientData;
        }
        let (first, second) = self.slices(&self.span_region(self.read, pattern.len()));
        let (front, back) = pattern.split_at(first.len());
        if first == front && second == back {
            Comparison::Equal
        } else {
            Comparison::NotEqual
        }
    }

    /// Copies up to `dst.len()` buffered bytes into `dst` without consuming
    /// them. Returns the number of bytes copied.
    pub fn peek(&self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.used());
        let (first, second) = self.slices(&self.span_region(self.read, n));
        let split = first.len();
        dst[..split].copy_from_slice(first);
        dst[split..n].copy_from_slice(second);
        n
    }

    /// Copies up to `dst.len()` buffered bytes into `dst` and consumes them.
    ///
    /// Returns the number of bytes read; a short read is not an error.
    pub fn read(&mut self, dst: &mut [u8]) -> usize {
        let n = self.peek(dst);
        self.finish_read(n, dst.len());
        n
    }

    /// Advances the read cursor by `min(n, used())` and returns that count.
    pub fn commit_read(&mut self, n: usize) -> usize {
        let committed = n.min(self.used());
        self.finish_read(committed, n);
        committed
    }

    /// Consumes exactly `n` bytes, or nothing if fewer than `n` are buffered.
    pub fn try_commit_read(&mut self, n: usize) -> Result<(), CommitError> {
        let available = self.used();
        if n > available {
            return Err(CommitError {
                attempted: n,
                available,
            });
        }
        self.finish_read(n, n);
        Ok(())
    }

    fn finish_read(&mut self, committed: usize, requested: usize) {
        self.read = self.read.wrapping_add(committed) & self.mask;
        debug_assert_cursor_in_range!("read", self.read, self.size());

        if committed < requested {
            tracing::trace!(requested, committed, "read saturated at buffered data");
        }
        if self.enable_metrics {
            self.metrics.record_read(committed, requested);
        }
    }

    /// Hands the buffered bytes to `writer` in one `write_vectored` call and
    /// consumes what it accepted.
    ///
    /// Returns `Ok(0)` if the ring is empty. `Interrupted` is retried; every
    /// other error, including `WouldBlock`, is returned with nothing consumed.
    pub fn drain_into<W: Write + ?Sized>(&mut self, writer: &mut W) -> io::Result<usize> {
        let region = self.request_read_region();
        if region.is_empty() {
            return Ok(0);
        }
        let n = loop {
            match writer.write_vectored(&self.io_slices(&region)) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "writer accepted no buffered bytes",
                    ));
                }
                Ok(n) => break n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };
        Ok(self.commit_read(n))
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> RingBuffer<S> {
    /// Resolves a region into mutable byte slices, in logical order.
    ///
    /// # Panics
    ///
    /// Panics if the region does not fit this ring's storage, or if its two
    /// spans overlap (regions produced by this ring never do).
    pub fn slices_mut(&mut self, region: &Region) -> (&mut [u8], &mut [u8]) {
        let storage = self.storage.as_mut();
        match (region.first(), region.second()) {
            (None, _) => (Default::default(), Default::default()),
            (Some(first), None) => (&mut storage[first.range()], Default::default()),
            (Some(first), Some(second)) => {
                assert!(
                    second.end() <= first.offset,
                    "wrapped span {:?} overlaps leading span {:?}",
                    second,
                    first
                );
                let (low, high) = storage.split_at_mut(first.offset);
                (&mut high[..first.len], &mut low[second.range()])
            }
        }
    }

    /// Resolves a region into `IoSliceMut`s for `read_vectored`.
    pub fn io_slices_mut(&mut self, region: &Region) -> [IoSliceMut<'_>; 2] {
        let (first, second) = self.slices_mut(region);
        [IoSliceMut::new(first), IoSliceMut::new(second)]
    }

    /// Copies up to `free()` bytes from `src` into the ring and commits them.
    ///
    /// Returns the number of bytes written; a short write is not an error.
    pub fn write(&mut self, src: &[u8]) -> usize {
        let n = src.len().min(self.free());
        let region = self.span_region(self.write, n);
        let (first, second) = self.slices_mut(&region);
        let split = first.len();
        first.copy_from_slice(&src[..split]);
        second.copy_from_slice(&src[split..n]);
        self.finish_write(n, src.len());
        n
    }

    /// Fills free space from `reader` with one `read_vectored` call and
    /// commits what was read.
    ///
    /// Returns `Ok(0)` if the ring is full or the reader is at end of
    /// stream. `Interrupted` is retried; every other error, including
    /// `WouldBlock`, is returned with nothing committed.
    pub fn fill_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<usize> {
        let region = self.request_write_region();
        if region.is_empty() {
            return Ok(0);
        }
        let n = loop {
            let mut bufs = self.io_slices_mut(&region);
            match reader.read_vectored(&mut bufs) {
                Ok(n) => break n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };
        Ok(self.commit_write(n))
    }
}

impl<S> fmt::Debug for RingBuffer<S>
where
    S: AsRef<[u8]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("size", &self.size())
            .field("read", &self.read)
            .field("write", &self.write)
            .field("used", &self.used())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(size: usize) -> RingBuffer<Vec<u8>> {
        RingBuffer::from_storage(vec![0u8; size]).unwrap()
    }

    /// Moves both cursors to `pos` on an empty ring.
    fn ring_at(size: usize, pos: usize) -> RingBuffer<Vec<u8>> {
        let mut r = ring(size);
        r.commit_write(pos);
        r.commit_read(pos);
        assert_eq!((r.read_cursor(), r.write_cursor()), (pos, pos));
        r
    }

    fn contents(r: &RingBuffer<Vec<u8>>, region: &Region) -> Vec<u8> {
        let (a, b) = r.slices(region);
        [a, b].concat()
    }

    #[test]
    fn test_ring_new_from_config() {
        let r = RingBuffer::new(Config::new(4, false));
        assert_eq!(r.size(), 16);
        assert_eq!(r.capacity(), 15);
        assert_eq!(r.free(), 15);
        assert!(r.is_empty());
    }

    #[test]
    fn test_ring_rejects_bad_storage() {
        assert_eq!(
            RingBuffer::from_storage(vec![0u8; 12]).unwrap_err(),
            RingError::NotPowerOfTwo { size: 12 }
        );
        assert_eq!(
            RingBuffer::from_storage(Vec::<u8>::new()).unwrap_err(),
            RingError::ZeroSize
        );
    }

    #[test]
    fn test_ring_borrowed_storage() {
        let mut backing = [0u8; 8];
        {
            let mut r = RingBuffer::from_storage(&mut backing[..]).unwrap();
            assert_eq!(r.write(b"abc"), 3);
        }
        assert_eq!(&backing[..3], b"abc");
    }

    #[test]
    fn test_ring_basic_write_read() {
        let mut r = ring(16);
        assert_eq!(r.write(b"hello"), 5);
        assert_eq!(r.used(), 5);
        assert_eq!(r.free(), 10);

        let mut out = [0u8; 5];
        assert_eq!(r.read(&mut out), 5);
        assert_eq!(&out, b"hello");
        assert!(r.is_empty());
    }

    #[test]
    fn test_ring_full_keeps_reserved_byte() {
        let mut r = ring(8);
        assert_eq!(r.write(b"0123456789"), 7);
        assert!(r.is_full());
        assert_eq!(r.used(), 7);
        assert_eq!(r.write(b"x"), 0);
        assert_eq!(r.commit_write(3), 0);
        assert!(r.request_write_region().is_empty());
    }

    #[test]
    fn test_ring_write_wraps_across_boundary() {
        let mut r = ring(8);
        assert_eq!(r.write(b"ABCDE"), 5);
        let mut out = [0u8; 3];
        assert_eq!(r.read(&mut out), 3);
        assert_eq!(&out, b"ABC");
        assert_eq!(r.used(), 2);

        let region = r.request_write_region();
        assert_eq!(region.spans(), &[Span::new(5, 3), Span::new(0, 2)]);

        assert_eq!(r.write(b"FGHI"), 4);
        assert_eq!(r.write_cursor(), 1);

        let mut out = [0u8; 6];
        assert_eq!(r.read(&mut out), 6);
        assert_eq!(&out, b"DEFGHI");
    }

    #[test]
    fn test_ring_write_region_fill_and_commit() {
        let mut r = ring_at(8, 6);
        let region = r.request_write_region();
        assert_eq!(region.spans(), &[Span::new(6, 2), Span::new(0, 5)]);
        assert_eq!(r.request_write_region(), region);

        let (first, second) = r.slices_mut(&region);
        first.copy_from_slice(b"ab");
        second[..2].copy_from_slice(b"cd");
        assert_eq!(r.commit_write(4), 4);

        assert_eq!(contents(&r, &r.request_read_region()), b"abcd");
    }

    #[test]
    fn test_ring_read_region_ending_at_storage_end_is_single_span() {
        let mut r = ring_at(8, 5);
        r.write(b"xyz");
        assert_eq!(r.write_cursor(), 0);
        let region = r.request_read_region();
        assert_eq!(region.spans(), &[Span::new(5, 3)]);
    }

    #[test]
    fn test_ring_read_exact_all_or_nothing() {
        let mut r = ring_at(8, 6);
        r.write(b"abcd");

        assert!(r.request_read_exact(5).is_empty());
        assert_eq!(r.request_read_exact(5).span_count(), 0);

        let region = r.request_read_exact(3);
        assert_eq!(region.spans(), &[Span::new(6, 2), Span::new(0, 1)]);
        assert_eq!(contents(&r, &region), b"abc");
        assert!(r.request_read_exact(0).is_empty());
    }

    #[test]
    fn test_ring_read_until_byte() {
        let mut r = ring_at(8, 5);
        r.write(b"ab\ncd");

        let region = r.request_read_until_byte(b'\n').unwrap();
        assert_eq!(contents(&r, &region), b"ab");
        assert!(r.request_read_until_byte(b'z').is_none());

        r.commit_read(region.len() + 1);
        assert_eq!(contents(&r, &r.request_read_region()), b"cd");
    }

    #[test]
    fn test_ring_read_until_byte_in_wrapped_part() {
        let mut r = ring_at(8, 6);
        r.write(b"abc;d");
        let region = r.request_read_until_byte(b';').unwrap();
        assert_eq!(region.spans(), &[Span::new(6, 2), Span::new(0, 1)]);
        assert_eq!(contents(&r, &region), b"abc");
    }

    #[test]
    fn test_ring_read_until_byte_at_cursor_is_empty_match() {
        let mut r = ring(8);
        r.write(b";abc");
        let region = r.request_read_until_byte(b';').unwrap();
        assert!(region.is_empty());
        assert!(ring(8).request_read_until_byte(b';').is_none());
    }

    #[test]
    fn test_ring_read_until_sequence_straddling() {
        // "XXAB" at physical [4, 8), "CYY" at [0, 3)
        let mut r = ring_at(8, 4);
        assert_eq!(r.write(b"XXABCYY"), 7);
        assert_eq!((r.read_cursor(), r.write_cursor()), (4, 3));

        let region = r.request_read_until_sequence(b"ABC").unwrap();
        assert_eq!(region.spans(), &[Span::new(4, 2)]);
        assert_eq!(contents(&r, &region), b"XX");
    }

    #[test]
    fn test_ring_read_until_sequence_in_head() {
        let mut r = ring_at(8, 6);
        r.write(b"XYZ\r\nQ");
        let region = r.request_read_until_sequence(b"\r\n").unwrap();
        assert_eq!(region.spans(), &[Span::new(6, 2), Span::new(0, 1)]);
        assert_eq!(contents(&r, &region), b"XYZ");
    }

    #[test]
    fn test_ring_read_until_sequence_misses() {
        let mut r = ring(16);
        r.write(b"abcdef");
        assert!(r.request_read_until_sequence(b"abcdefg").is_none());
        assert!(r.request_read_until_sequence(b"xy").is_none());
        assert!(r.request_read_until_sequence(b"").is_none());
        assert_eq!(
            r.request_read_until_sequence(b"d").map(|region| region.len()),
            Some(3)
        );
    }

    #[test]
    fn test_ring_compare() {
        let mut r = ring_at(8, 6);
        r.write(b"GET /");

        assert_eq!(r.compare(b"GET"), Comparison::Equal);
        assert_eq!(r.compare(b"PUT"), Comparison::NotEqual);
        assert_eq!(r.compare(b"GET / HTTP"), Comparison::InsufficientData);
        assert_eq!(r.compare(b""), Comparison::Equal);
        // nothing consumed
        assert_eq!(r.used(), 5);
    }

    #[test]
    fn test_ring_commit_saturates() {
        let mut r = ring(8);
        assert_eq!(r.commit_write(100), 7);
        assert_eq!(r.used(), 7);
        assert_eq!(r.commit_read(100), 7);
        assert!(r.is_empty());
    }

    #[test]
    fn test_ring_try_commit() {
        let mut r = ring(8);
        assert_eq!(
            r.try_commit_write(8),
            Err(CommitError {
                attempted: 8,
                available: 7
            })
        );
        assert!(r.is_empty());
        assert!(r.try_commit_write(4).is_ok());
        assert_eq!(
            r.try_commit_read(5),
            Err(CommitError {
                attempted: 5,
                available: 4
            })
        );
        assert!(r.try_commit_read(4).is_ok());
        assert!(r.is_empty());
    }

    #[test]
    fn test_ring_peek_does_not_consume() {
        let mut r = ring_at(8, 7);
        r.write(b"wrap");
        let mut out = [0u8; 8];
        assert_eq!(r.peek(&mut out), 4);
        assert_eq!(&out[..4], b"wrap");
        assert_eq!(r.used(), 4);
    }

    #[test]
    fn test_ring_clear() {
        let mut r = ring_at(8, 3);
        r.write(b"abc");
        r.clear();
        assert!(r.is_empty());
        assert_eq!((r.read_cursor(), r.write_cursor()), (0, 0));
    }

    #[test]
    fn test_ring_metrics() {
        let mut r = RingBuffer::new(Config::new(3, true));
        r.write(b"0123456789");
        let mut out = [0u8; 16];
        r.read(&mut out);

        let snap = r.metrics();
        assert_eq!(snap.bytes_written, 7);
        assert_eq!(snap.short_writes, 1);
        assert_eq!(snap.bytes_read, 7);
        assert_eq!(snap.short_reads, 1);

        let mut quiet = ring(8);
        quiet.write(b"abc");
        assert_eq!(quiet.metrics(), MetricsSnapshot::default());
    }

    #[test]
    fn test_ring_debug_format() {
        let mut r = ring(8);
        r.write(b"ab");
        let text = format!("{:?}", r);
        assert!(text.contains("size: 8"));
        assert!(text.contains("used: 2"));
    }
}
