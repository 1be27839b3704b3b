// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ChooseIndexPredicate - picks one pool index per combination slot.

use crate::context::EnumerationContext;
use crate::engine::{Predicate, PredicateResult};

/// Chooses a strictly increasing pool index for each round.
///
/// This predicate runs for `size` rounds (0..size), choosing the index for
/// one slot per round. On the final round (`size`) the combination is
/// complete and the predicate succeeds, handing over to the next predicate.
///
/// # Choices
///
/// For round r, with the previous slot at index p (or -1 for round 0), the
/// candidates are p+1 ..= pool_len - (size - r). Stopping early leaves room
/// for the remaining slots, so no path dead-ends. Choices are tried in
/// increasing order, which yields combinations in lexicographic order.
#[derive(Debug)]
pub struct ChooseIndexPredicate;

impl ChooseIndexPredicate {
    /// First candidate index for `round`.
    fn first_candidate(ctx: &EnumerationContext, round: usize) -> usize {
        if round == 0 {
            0
        } else {
            ctx.chosen_index(round - 1) + 1
        }
    }
}

impl Predicate for ChooseIndexPredicate {
    fn try_pred(&mut self, ctx: &mut EnumerationContext, round: usize) -> PredicateResult {
        let size = ctx.size();
        if round == size {
            return PredicateResult::Success;
        }

        let start = Self::first_candidate(ctx, round);
        let remaining = size - round;
        if ctx.pool_len() < remaining || start > ctx.pool_len() - remaining {
            return PredicateResult::Failure;
        }
        let last = ctx.pool_len() - remaining;
        PredicateResult::Choices(last - start + 1)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut EnumerationContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let index = Self::first_candidate(ctx, round) + choice;

        debug_assert!(
            index + (ctx.size() - round) <= ctx.pool_len(),
            "Choice {} in round {} leaves no room for the remaining slots",
            choice,
            round
        );

        ctx.choose(round, index);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ChooseIndex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_per_round() {
        let mut ctx = EnumerationContext::new(5, 3);
        let mut pred = ChooseIndexPredicate;

        // Round 0: indices 0..=2
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(3));

        // After choosing 1, round 1 may use 2..=3
        assert_eq!(pred.retry_pred(&mut ctx, 0, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.chosen_index(0), 1);
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Choices(2));

        // Choosing 3 leaves exactly index 4 for the last slot
        assert_eq!(pred.retry_pred(&mut ctx, 1, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.chosen_index(1), 3);
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Choices(1));
    }

    #[test]
    fn test_final_round_succeeds() {
        let mut ctx = EnumerationContext::new(4, 2);
        let mut pred = ChooseIndexPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Success);
    }

    #[test]
    fn test_pool_smaller_than_size_fails() {
        let mut ctx = EnumerationContext::new(2, 3);
        let mut pred = ChooseIndexPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }
}
