//! RingIov - Fixed-Capacity Byte Ring with Scatter/Gather Regions
//!
//! A single-owner circular byte buffer over power-of-two storage. Readers
//! and writers work on [`Region`]s: at most two `(offset, len)` spans that
//! together describe a logical byte range, split where it crosses the end
//! of storage. Regions map directly onto `IoSlice`/`IoSliceMut` pairs for
//! vectored I/O.
//!
//! # Key Features
//!
//! - Mask-based cursor arithmetic (storage size is a power of two)
//! - One reserved byte: `read == write` always means empty
//! - Zero-copy request/commit API on both sides
//! - Delimiter and multi-byte pattern search that sees matches straddling
//!   the wrap boundary
//! - Non-blocking, saturating semantics: short writes/reads, empty regions
//!
//! # Example
//!
//! ```
//! use ringiov_rs::{Comparison, Config, RingBuffer};
//!
//! let mut ring = RingBuffer::new(Config::new(4, false)); // 16 bytes
//!
//! // Simple API: write() copies and commits
//! ring.write(b"PING\r\nrest");
//!
//! // Zero-copy API: locate a frame without copying it
//! assert_eq!(ring.compare(b"PING"), Comparison::Equal);
//! if let Some(frame) = ring.request_read_until_sequence(b"\r\n") {
//!     let (first, second) = ring.slices(&frame);
//!     assert_eq!([first, second].concat(), b"PING");
//!     ring.commit_read(frame.len() + 2);
//! }
//!
//! let mut rest = [0u8; 8];
//! let n = ring.read(&mut rest);
//! assert_eq!(&rest[..n], b"rest");
//! ```

mod config;
mod error;
mod invariants;
mod metrics;
mod region;
mod ring;
mod search;

pub use config::{Config, LARGE_STREAM_CONFIG, MAX_RING_BITS, SMALL_FRAME_CONFIG};
pub use error::{CommitError, RingError};
pub use metrics::{Metrics, MetricsSnapshot};
pub use region::{Region, Span};
pub use ring::{Comparison, RingBuffer};
