// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combination enumeration.
//!
//! Every strategy here produces each increasing-index k-subset of
//! `0..pool_len` exactly once, in strict lexicographic order:
//!
//! - [`for_each_combination`]: fixed-depth unrolled loops for k in 2..=4
//! - [`CombinationCursor`] / [`Combinations`]: restartable lazy sequence that
//!   can start at any lexicographic rank, used to partition the search
//! - [`backtrack::for_each_combination_backtracking`]: general enumerator for
//!   any k, driven by the predicate engine
//!
//! The lexicographic rank of a combination is its position in this order;
//! [`binomial`] gives the total count.

pub mod backtrack;
pub mod cursor;

pub use backtrack::for_each_combination_backtracking;
pub use cursor::{CombinationCursor, Combinations};

use crate::error::{InvalidArgument, Result};

/// Smallest supported combination size.
pub const MIN_COMBINATION: usize = 2;

/// Largest combination size handled by the unrolled enumerator (and the search).
pub const MAX_COMBINATION: usize = 4;

/// Number of k-subsets of an n-set.
///
/// Exact for every result that fits in a u64; larger counts saturate at
/// `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut result: u128 = 1;
    for i in 0..k {
        // result is C(n, i) <= C(n, k), so the product fits in a u128 while
        // the running count still fits in a u64. Divisible by (i + 1).
        result = result * (n - i) / (i + 1);
        if result > u64::MAX as u128 {
            // C(n, i) only grows up to i = n / 2
            return u64::MAX;
        }
    }
    result as u64
}

/// Check that `k` is a supported combination size for a pool of `pool_len`.
pub fn validate(pool_len: usize, k: usize) -> Result<()> {
    if !(MIN_COMBINATION..=MAX_COMBINATION).contains(&k) {
        return Err(InvalidArgument::CombinationSize {
            k,
            min: MIN_COMBINATION,
            max: MAX_COMBINATION,
        }
        .into());
    }
    if pool_len == 0 {
        return Err(InvalidArgument::EmptyPool.into());
    }
    if k > pool_len {
        return Err(InvalidArgument::PoolTooSmall { pool: pool_len, k }.into());
    }
    Ok(())
}

/// Visit every k-subset of `0..pool_len` in lexicographic order.
///
/// The slice passed to `visit` is only valid for the duration of the call.
///
/// # Errors
///
/// Fails with an invalid-argument error if k is outside 2..=4 or exceeds
/// the pool.
pub fn for_each_combination<F>(pool_len: usize, k: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&[usize]),
{
    validate(pool_len, k)?;
    let n = pool_len;

    match k {
        2 => {
            for a in 0..n {
                for b in a + 1..n {
                    visit(&[a, b]);
                }
            }
        }
        3 => {
            for a in 0..n {
                for b in a + 1..n {
                    for c in b + 1..n {
                        visit(&[a, b, c]);
                    }
                }
            }
        }
        _ => {
            for a in 0..n {
                for b in a + 1..n {
                    for c in b + 1..n {
                        for d in c + 1..n {
                            visit(&[a, b, c, d]);
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
