// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Restartable lexicographic combination cursor.
//!
//! A cursor can be positioned at any lexicographic rank by unranking, then
//! advanced in place. Splitting `0..binomial(n, k)` into contiguous rank
//! ranges and giving each range its own cursor partitions the enumeration
//! without overlap.

use crate::enumerate::binomial;
use crate::error::{InvalidArgument, Result};
use std::ops::Range;

/// Cursor over the k-subsets of `0..pool_len` within a rank range.
#[derive(Debug, Clone)]
pub struct CombinationCursor {
    pool_len: usize,
    indices: Vec<usize>,
    /// Rank of `indices`.
    rank: u64,
    end: u64,
    started: bool,
}

impl CombinationCursor {
    /// Cursor over every k-subset of `0..pool_len`.
    pub fn new(pool_len: usize, k: usize) -> Result<Self> {
        Self::with_range(pool_len, k, 0..binomial(pool_len, k))
    }

    /// Cursor over the combinations whose rank lies in `range`.
    ///
    /// # Errors
    ///
    /// Fails if k is zero, exceeds the pool, or the range extends past the
    /// total number of combinations.
    pub fn with_range(pool_len: usize, k: usize, range: Range<u64>) -> Result<Self> {
        if k == 0 {
            return Err(InvalidArgument::CombinationSize { k, min: 1, max: pool_len }.into());
        }
        if k > pool_len {
            return Err(InvalidArgument::PoolTooSmall { pool: pool_len, k }.into());
        }
        let total = binomial(pool_len, k);
        if range.end > total {
            return Err(InvalidArgument::RankRange { end: range.end, total }.into());
        }
        let start = range.start.min(range.end);
        Ok(Self {
            pool_len,
            indices: unrank(pool_len, k, start.min(total.saturating_sub(1))),
            rank: start,
            end: range.end,
            started: false,
        })
    }

    /// Advance to the next combination, returning its rank and indices.
    ///
    /// The returned slice is only valid until the next call.
    pub fn advance(&mut self) -> Option<(u64, &[usize])> {
        if self.started {
            self.rank += 1;
            if self.rank >= self.end {
                return None;
            }
            next_combination(&mut self.indices, self.pool_len);
        } else {
            self.started = true;
            if self.rank >= self.end {
                return None;
            }
        }
        Some((self.rank, &self.indices))
    }

    /// Number of combinations left to visit.
    pub fn remaining(&self) -> u64 {
        let next = if self.started { self.rank + 1 } else { self.rank };
        self.end.saturating_sub(next)
    }
}

/// Owning iterator over combinations, built on [`CombinationCursor`].
#[derive(Debug, Clone)]
pub struct Combinations {
    cursor: CombinationCursor,
}

impl Combinations {
    pub fn new(pool_len: usize, k: usize) -> Result<Self> {
        Ok(Self {
            cursor: CombinationCursor::new(pool_len, k)?,
        })
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance().map(|(_, indices)| indices.to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.cursor.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Combination at lexicographic `rank` among the k-subsets of `0..pool_len`.
pub fn unrank(pool_len: usize, k: usize, mut rank: u64) -> Vec<usize> {
    let mut indices = Vec::with_capacity(k);
    let mut candidate = 0;
    for slot in 0..k {
        loop {
            // Combinations that put `candidate` in this slot
            let block = binomial(pool_len - candidate - 1, k - slot - 1);
            if rank < block {
                break;
            }
            rank -= block;
            candidate += 1;
        }
        indices.push(candidate);
        candidate += 1;
    }
    indices
}

/// Lexicographic rank of a strictly increasing index tuple.
pub fn rank(pool_len: usize, indices: &[usize]) -> u64 {
    let k = indices.len();
    let mut rank = 0;
    let mut candidate = 0;
    for (slot, &index) in indices.iter().enumerate() {
        while candidate < index {
            rank += binomial(pool_len - candidate - 1, k - slot - 1);
            candidate += 1;
        }
        candidate = index + 1;
    }
    rank
}

/// Step `indices` to the lexicographically next combination in place.
///
/// Returns false (leaving `indices` unchanged) at the last combination.
fn next_combination(indices: &mut [usize], pool_len: usize) -> bool {
    let k = indices.len();
    for slot in (0..k).rev() {
        if indices[slot] < pool_len - k + slot {
            indices[slot] += 1;
            for later in slot + 1..k {
                indices[later] = indices[later - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::for_each_combination;

    #[test]
    fn test_cursor_matches_unrolled_order() {
        let mut expected = Vec::new();
        for_each_combination(7, 3, |c| expected.push(c.to_vec())).unwrap();

        let actual: Vec<Vec<usize>> = Combinations::new(7, 3).unwrap().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_rank_unrank_inverse() {
        let n = 9;
        let k = 4;
        for r in 0..binomial(n, k) {
            let indices = unrank(n, k, r);
            assert_eq!(rank(n, &indices), r);
        }
    }

    #[test]
    fn test_range_resumes_mid_sequence() {
        let all: Vec<Vec<usize>> = Combinations::new(6, 2).unwrap().collect();

        let mut cursor = CombinationCursor::with_range(6, 2, 4..9).unwrap();
        assert_eq!(cursor.remaining(), 5);
        let mut seen = Vec::new();
        while let Some((r, indices)) = cursor.advance() {
            assert_eq!(all[r as usize], indices);
            seen.push(r);
        }
        assert_eq!(seen, vec![4, 5, 6, 7, 8]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_empty_range() {
        let mut cursor = CombinationCursor::with_range(5, 2, 3..3).unwrap();
        assert!(cursor.advance().is_none());
    }

    #[test]
    fn test_range_past_end_rejected() {
        assert!(CombinationCursor::with_range(5, 2, 0..11).is_err());
        assert!(CombinationCursor::with_range(3, 4, 0..0).is_err());
    }

    #[test]
    fn test_size_hint() {
        let combos = Combinations::new(10, 3).unwrap();
        assert_eq!(combos.size_hint(), (120, Some(120)));
    }
}
