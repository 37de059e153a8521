use ringiov_rs::{Comparison, Config, RingBuffer};
use std::io::Cursor;
use std::time::Instant;

/// Streams newline-terminated records through a small ring, reading them
/// with the zero-copy region API instead of copying each frame out.
fn main() {
    println!("RingIov Zero-Copy Framing Example");
    println!("=================================\n");

    // Small ring so that frames regularly straddle the wrap boundary
    let config = Config::new(
        10,   // 1 KiB storage
        true, // metrics enabled to show traffic counters
    );
    let mut ring = RingBuffer::new(config);

    const RECORDS: usize = 100_000;
    let mut input = Vec::new();
    for i in 0..RECORDS {
        input.extend_from_slice(format!("rec {i} payload\r\n").as_bytes());
    }
    let mut source = Cursor::new(input);

    println!("Configuration:");
    println!("  Storage: {} bytes ({} usable)", ring.size(), ring.capacity());
    println!("  Records: {}\n", RECORDS);

    let start = Instant::now();
    let mut frames = 0usize;
    let mut wrapped = 0usize;
    let mut checksum = 0u64;

    loop {
        // Producer side: vectored read straight into free space
        let filled = ring.fill_from(&mut source).expect("in-memory reader");

        // Consumer side: frame without copying
        while let Some(frame) = ring.request_read_until_sequence(b"\r\n") {
            if frame.is_wrapped() {
                wrapped += 1;
            }
            let (first, second) = ring.slices(&frame);
            checksum += first.iter().chain(second).map(|&b| u64::from(b)).sum::<u64>();
            ring.commit_read(frame.len() + 2);
            frames += 1;
        }

        if filled == 0 && !ring.is_full() {
            break;
        }
    }

    let duration = start.elapsed();
    assert_eq!(frames, RECORDS);
    assert_eq!(ring.compare(b"\r\n"), Comparison::InsufficientData);

    let metrics = ring.metrics();
    println!("Results:");
    println!("  Frames: {}", frames);
    println!("  Frames split across the wrap: {}", wrapped);
    println!("  Checksum: {}", checksum);
    println!("  Bytes in/out: {} / {}", metrics.bytes_written, metrics.bytes_read);
    println!("  Duration: {:.2?}", duration);
    println!(
        "  Throughput: {:.2} million frames/sec",
        frames as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}
