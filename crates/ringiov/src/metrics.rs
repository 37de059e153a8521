/// Optional counters for monitoring ring traffic.
///
/// Only updated when [`Config::enable_metrics`](crate::Config::enable_metrics)
/// is set. The ring has a single owner, so plain integers suffice.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    bytes_written: u64,
    bytes_read: u64,
    write_commits: u64,
    read_commits: u64,
    short_writes: u64,
    short_reads: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a write-side advance of `n` bytes out of `requested`.
    #[inline]
    pub(crate) fn record_write(&mut self, n: usize, requested: usize) {
        self.bytes_written += n as u64;
        self.write_commits += 1;
        if n < requested {
            self.short_writes += 1;
        }
    }

    /// Records a read-side advance of `n` bytes out of `requested`.
    #[inline]
    pub(crate) fn record_read(&mut self, n: usize, requested: usize) {
        self.bytes_read += n as u64;
        self.read_commits += 1;
        if n < requested {
            self.short_reads += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            bytes_written: self.bytes_written,
            bytes_read: self.bytes_read,
            write_commits: self.write_commits,
            read_commits: self.read_commits,
            short_writes: self.short_writes,
            short_reads: self.short_reads,
        }
    }
}

/// Point-in-time copy of [`Metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub write_commits: u64,
    pub read_commits: u64,
    /// Write-side calls that advanced fewer bytes than asked.
    pub short_writes: u64,
    /// Read-side calls that advanced fewer bytes than asked.
    pub short_reads: u64,
}
