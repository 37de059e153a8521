//! Pattern search over the two physical slices of a wrapped byte range.
//!
//! The used bytes of a ring are `tail ++ head`: `tail` runs from the read
//! cursor to the end of storage (or to the write cursor), `head` continues
//! at offset 0. Every function here returns the *logical* offset of the
//! earliest match, counted from the start of `tail`.

/// Finds the first occurrence of `needle` in `tail ++ head`.
pub(crate) fn find_byte(tail: &[u8], head: &[u8], needle: u8) -> Option<usize> {
    if let Some(pos) = tail.iter().position(|&b| b == needle) {
        return Some(pos);
    }
    head.iter()
        .position(|&b| b == needle)
        .map(|pos| tail.len() + pos)
}

/// Finds the first occurrence of `pattern` in `tail ++ head`, including
/// occurrences that start in `tail` and finish in `head`.
///
/// An empty pattern never matches.
pub(crate) fn find_sequence(tail: &[u8], head: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = pattern.len();
    match n {
        0 => return None,
        1 => return find_byte(tail, head, pattern[0]),
        _ => {}
    }
    if tail.len() + head.len() < n {
        return None;
    }

    // Entirely inside tail.
    if let Some(pos) = find_within(tail, pattern) {
        return Some(pos);
    }

    // Straddling the boundary: `k` leading pattern bytes sit at the end of
    // tail, the remaining `n - k` at the start of head. Larger `k` starts
    // earlier, so walk `k` downwards.
    let max_k = (n - 1).min(tail.len());
    for k in (1..=max_k).rev() {
        let (front, back) = pattern.split_at(k);
        if tail.ends_with(front) && head.starts_with(back) {
            return Some(tail.len() - k);
        }
    }

    // Entirely inside head.
    find_within(head, pattern).map(|pos| tail.len() + pos)
}

/// Plain substring search inside one contiguous slice. `pattern` must be
/// non-empty.
fn find_within(haystack: &[u8], pattern: &[u8]) -> Option<usize> {
    debug_assert!(!pattern.is_empty());
    if haystack.len() < pattern.len() {
        return None;
    }
    haystack
        .windows(pattern.len())
        .position(|window| window == pattern)
}
