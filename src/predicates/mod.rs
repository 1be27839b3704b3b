// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine predicates for combination enumeration.
//!
//! # Organization
//!
//! - `choose`: ChooseIndexPredicate, one strictly increasing pool index per round
//! - `visit`: VisitPredicate, reports each complete combination then fails
//! - Built-in predicates: `FailPredicate`

pub mod choose;
pub mod visit;

pub use choose::ChooseIndexPredicate;
pub use visit::VisitPredicate;

use crate::context::EnumerationContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing the engine to backtrack into the remaining
/// alternatives. Ending a program with it makes the search exhaustive.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut EnumerationContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut EnumerationContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineBuilder;

    #[test]
    fn test_fail_predicate() {
        let mut ctx = EnumerationContext::new(3, 1);
        let mut pred = FailPredicate;

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_choose_then_fail_exhausts() {
        let mut ctx = EnumerationContext::new(4, 2);
        let engine = EngineBuilder::new()
            .add(Box::new(ChooseIndexPredicate))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert!(ctx.trail.is_empty());
    }
}
