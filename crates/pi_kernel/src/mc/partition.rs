//! Division of the toss index space into disjoint ranges.

use std::ops::Range;

/// Splits `0..total` into `parts` contiguous ranges.
///
/// The first `total % parts` ranges receive one extra toss, so sizes differ
/// by at most one. Ranges are disjoint, ordered and cover `0..total` exactly.
/// Empty ranges are returned when `parts > total`.
///
/// # Panics
///
/// Panics if `parts` is 0.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::split_even;
///
/// let ranges = split_even(10, 3);
/// assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
/// ```
pub fn split_even(total: u64, parts: usize) -> Vec<Range<u64>> {
    assert!(parts > 0, "split_even requires at least one part");
    let parts = parts as u64;
    (0..parts).map(|index| even_range(total, parts, index)).collect()
}

/// Returns range `index` of the [`split_even`] division without building the
/// whole list.
///
/// Range `w` starts at `w * base + min(w, extra)` where `base = total / parts`
/// and `extra = total % parts`. Indices `>= total` receive an empty range.
///
/// # Panics
///
/// Panics if `parts` is 0.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::{even_range, split_even};
///
/// assert_eq!(even_range(10, 3, 1), 4..7);
/// assert_eq!(even_range(10, 3, 2), split_even(10, 3)[2]);
/// ```
#[inline]
pub fn even_range(total: u64, parts: u64, index: u64) -> Range<u64> {
    assert!(parts > 0, "even_range requires at least one part");
    let base = total / parts;
    let extra = total % parts;
    let start = index * base + index.min(extra);
    let len = base + u64::from(index < extra);
    start..start + len
}

/// Number of chunks of `chunk_size` needed to cover `total` tosses.
#[inline]
pub fn chunk_count(total: u64, chunk_size: u64) -> u64 {
    total.div_ceil(chunk_size)
}

/// Returns the toss range covered by chunk `index`.
///
/// The final chunk is truncated at `total`.
#[inline]
pub fn chunk_range(total: u64, chunk_size: u64, index: u64) -> Range<u64> {
    let start = index.saturating_mul(chunk_size).min(total);
    let end = start.saturating_add(chunk_size).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(ranges: &[Range<u64>], total: u64) {
        let mut expected_start = 0;
        for range in ranges {
            assert_eq!(range.start, expected_start);
            assert!(range.end >= range.start);
            expected_start = range.end;
        }
        assert_eq!(expected_start, total);
    }

    #[test]
    fn test_split_even_sizes_differ_by_at_most_one() {
        for total in [0u64, 1, 7, 100, 1_000_003] {
            for parts in [1usize, 2, 3, 8, 13] {
                let ranges = split_even(total, parts);
                assert_eq!(ranges.len(), parts);
                assert_covers(&ranges, total);

                let sizes: Vec<u64> = ranges.iter().map(|r| r.end - r.start).collect();
                let min = *sizes.iter().min().unwrap();
                let max = *sizes.iter().max().unwrap();
                assert!(max - min <= 1, "total={} parts={} sizes={:?}", total, parts, sizes);
            }
        }
    }

    #[test]
    fn test_split_even_more_parts_than_tosses() {
        let ranges = split_even(2, 4);
        assert_eq!(ranges, vec![0..1, 1..2, 2..2, 2..2]);
    }

    #[test]
    fn test_split_even_large_total() {
        let total = i64::MAX as u64;
        let ranges = split_even(total, 8);
        assert_covers(&ranges, total);
    }

    #[test]
    #[should_panic(expected = "at least one part")]
    fn test_split_even_zero_parts_panics() {
        let _ = split_even(10, 0);
    }

    #[test]
    fn test_even_range_matches_split_even() {
        for (total, parts) in [(0u64, 1usize), (10, 3), (2, 4), (1_000_003, 13)] {
            let ranges = split_even(total, parts);
            for (index, range) in ranges.iter().enumerate() {
                assert_eq!(&even_range(total, parts as u64, index as u64), range);
            }
        }
    }

    #[test]
    fn test_even_range_huge_part_count() {
        let parts = 1u64 << 30;
        assert_eq!(even_range(10, parts, 0), 0..1);
        assert_eq!(even_range(10, parts, 9), 9..10);
        assert_eq!(even_range(10, parts, parts - 1), 10..10);
        assert_eq!(even_range(i64::MAX as u64, parts, parts - 1).end, i64::MAX as u64);
    }

    #[test]
    fn test_chunks_cover_total() {
        let total = 1_000_001;
        let chunk = 4096;
        let count = chunk_count(total, chunk);
        let ranges: Vec<Range<u64>> = (0..count).map(|k| chunk_range(total, chunk, k)).collect();
        assert_covers(&ranges, total);
        assert_eq!(ranges.last().map(|r| r.end - r.start), Some(total % chunk));
    }

    #[test]
    fn test_chunk_count_edges() {
        assert_eq!(chunk_count(0, 10), 0);
        assert_eq!(chunk_count(10, 10), 1);
        assert_eq!(chunk_count(11, 10), 2);
    }
}
