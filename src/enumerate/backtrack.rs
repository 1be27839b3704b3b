// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! General k-combination enumerator driven by the predicate engine.
//!
//! The program is two predicates long:
//!
//! ```text
//! ChooseIndex (rounds 0..k, one slot each) -> Visit (terminal, fails)
//! ```
//!
//! Because the terminal predicate always fails, the engine explores every
//! alternative and exhausts. Unlike the unrolled loops this supports any
//! combination size, at the price of engine overhead per step.

use crate::context::EnumerationContext;
use crate::engine::EngineBuilder;
use crate::error::{InvalidArgument, Result};
use crate::predicates::{ChooseIndexPredicate, VisitPredicate};

/// Visit every k-subset of `0..pool_len` in lexicographic order, for any
/// `1 <= k <= pool_len`.
///
/// # Errors
///
/// Fails with an invalid-argument error if k is zero, the pool is empty, or
/// k exceeds the pool. Nothing is visited in that case.
pub fn for_each_combination_backtracking<F>(pool_len: usize, k: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&[usize]),
{
    if pool_len == 0 {
        return Err(InvalidArgument::EmptyPool.into());
    }
    if k == 0 {
        return Err(InvalidArgument::CombinationSize {
            k,
            min: 1,
            max: pool_len,
        }
        .into());
    }
    if k > pool_len {
        return Err(InvalidArgument::PoolTooSmall { pool: pool_len, k }.into());
    }

    let mut ctx = EnumerationContext::new(pool_len, k);
    let engine = EngineBuilder::new()
        .add(Box::new(ChooseIndexPredicate))
        .terminal(Box::new(VisitPredicate::new(&mut visit)))
        .build();

    let suspended = engine.search(&mut ctx);
    debug_assert!(suspended.is_none(), "Enumeration program never suspends");
    Ok(())
}
