// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Static partitioning of the lexicographic rank space.

use std::ops::Range;

/// Split `0..total` into at most `parts` disjoint, contiguous, non-empty
/// ranges of near-equal size, in ascending order.
pub fn partition_ranges(total: u64, parts: usize) -> Vec<Range<u64>> {
    let parts = parts.max(1) as u64;
    let base = total / parts;
    let extra = total % parts;

    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = 0;
    for part in 0..parts {
        let size = base + u64::from(part < extra);
        if size == 0 {
            break;
        }
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}
