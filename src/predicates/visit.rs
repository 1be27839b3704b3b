// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! VisitPredicate - terminal predicate reporting complete combinations.

use crate::context::EnumerationContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use std::fmt;

/// Calls the visitor with the chosen indices, then fails.
///
/// Failing after every visit drives the engine through every alternative,
/// so the visitor sees each combination exactly once. The slice handed to
/// the visitor is only valid for the duration of the call.
pub struct VisitPredicate<'f> {
    visit: &'f mut dyn FnMut(&[usize]),
}

impl<'f> VisitPredicate<'f> {
    pub fn new(visit: &'f mut dyn FnMut(&[usize])) -> Self {
        Self { visit }
    }
}

impl<'f> fmt::Debug for VisitPredicate<'f> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitPredicate").finish_non_exhaustive()
    }
}

impl<'f> Predicate for VisitPredicate<'f> {
    fn try_pred(&mut self, ctx: &mut EnumerationContext, _round: usize) -> PredicateResult {
        (self.visit)(ctx.chosen());
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Visit"
    }
}

impl<'f> TerminalPredicate for VisitPredicate<'f> {}
