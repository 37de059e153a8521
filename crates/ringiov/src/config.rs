use crate::RingError;

/// Largest accepted `ring_bits`; `1 << MAX_RING_BITS` still fits in a `usize`.
pub const MAX_RING_BITS: u8 = (usize::BITS - 1) as u8;

/// Configuration for a [`RingBuffer`](crate::RingBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Storage size as power of 2 (default: 16 = 64 KiB)
    pub ring_bits: u8,
    /// Enable metrics collection (slight overhead)
    pub enable_metrics: bool,
}

impl Config {
    /// Creates a new configuration with custom settings.
    pub const fn new(ring_bits: u8, enable_metrics: bool) -> Self {
        Self {
            ring_bits,
            enable_metrics,
        }
    }

    /// Derives a configuration from a storage size in bytes.
    ///
    /// Fails if `size` is zero or not a power of two.
    pub const fn for_size(size: usize, enable_metrics: bool) -> Result<Self, RingError> {
        if size == 0 {
            return Err(RingError::ZeroSize);
        }
        if !size.is_power_of_two() {
            return Err(RingError::NotPowerOfTwo { size });
        }
        Ok(Self::new(size.trailing_zeros() as u8, enable_metrics))
    }

    /// Checks that `ring_bits` describes an addressable storage size.
    pub const fn validate(&self) -> Result<(), RingError> {
        if self.ring_bits > MAX_RING_BITS {
            return Err(RingError::RingBitsTooLarge {
                ring_bits: self.ring_bits,
            });
        }
        Ok(())
    }

    /// Returns the storage size in bytes.
    ///
    /// One byte is always kept free, so the buffer stores at most
    /// `capacity() - 1` bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        1 << self.ring_bits
    }

    /// Returns the mask for index wrapping.
    #[inline]
    pub const fn mask(&self) -> usize {
        self.capacity() - 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_bits: 16, // 64 KiB
            enable_metrics: false,
        }
    }
}

/// Small frame configuration (4 KiB, fits in L1 cache)
pub const SMALL_FRAME_CONFIG: Config = Config::new(12, false);

/// Large stream configuration (1 MiB, room for several socket receive windows)
pub const LARGE_STREAM_CONFIG: Config = Config::new(20, false);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let config = Config::default();
        assert_eq!(config.capacity(), 65536);
        assert_eq!(config.mask(), 65535);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_size() {
        assert_eq!(Config::for_size(8, true), Ok(Config::new(3, true)));
        assert_eq!(Config::for_size(1, false), Ok(Config::new(0, false)));
        assert_eq!(Config::for_size(0, false), Err(RingError::ZeroSize));
        assert_eq!(
            Config::for_size(12, false),
            Err(RingError::NotPowerOfTwo { size: 12 })
        );
    }

    #[test]
    fn test_validate_rejects_oversized_bits() {
        let config = Config::new(MAX_RING_BITS + 1, false);
        assert_eq!(
            config.validate(),
            Err(RingError::RingBitsTooLarge {
                ring_bits: MAX_RING_BITS + 1
            })
        );
        assert!(Config::new(MAX_RING_BITS, false).validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(SMALL_FRAME_CONFIG.capacity(), 4096);
        assert_eq!(LARGE_STREAM_CONFIG.capacity(), 1 << 20);
    }
}
