// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruning predicates.
//!
//! A predicate has two halves:
//!
//! - [`PruningPredicate::reject`] sees only the raw (pre-weakening) sums and
//!   the cooker, before the outcome exists. It may only reject a candidate
//!   whose outcome provably fails `accepts`. It must never reject a
//!   candidate that would pass.
//! - [`PruningPredicate::accepts`] is the strict filter on the cooked
//!   outcome. Nothing it refuses is ever retained.

use crate::cooking::{smoothness, Cooker};
use crate::model::{Flavor, Outcome, RawSums};

pub trait PruningPredicate: Send + Sync {
    /// True if no outcome cooked from `sums` can pass [`Self::accepts`].
    fn reject(&self, _sums: &RawSums, _cooker: &Cooker) -> bool {
        false
    }

    fn accepts(&self, outcome: &Outcome) -> bool;
}

/// Keep outcomes of at least the given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLevel(pub u8);

impl PruningPredicate for MinLevel {
    fn reject(&self, sums: &RawSums, cooker: &Cooker) -> bool {
        cooker.level_bound(sums) < self.0
    }

    fn accepts(&self, outcome: &Outcome) -> bool {
        outcome.level() >= self.0
    }
}

/// Keep outcomes with at least `min` of one flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinFlavor {
    pub flavor: Flavor,
    pub min: u8,
}

impl PruningPredicate for MinFlavor {
    fn reject(&self, sums: &RawSums, cooker: &Cooker) -> bool {
        cooker.flavor_bound(sums, self.flavor) < self.min
    }

    fn accepts(&self, outcome: &Outcome) -> bool {
        outcome.flavor(self.flavor) >= self.min
    }
}

/// Keep outcomes no rougher than the given smoothness.
///
/// Smoothness depends only on the raw sums, so the early reject is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSmoothness(pub u8);

impl PruningPredicate for MaxSmoothness {
    fn reject(&self, sums: &RawSums, _cooker: &Cooker) -> bool {
        smoothness(sums) > self.0
    }

    fn accepts(&self, outcome: &Outcome) -> bool {
        outcome.smoothness() <= self.0
    }
}

/// Conjunction. Rejects if any part rejects.
#[derive(Default)]
pub struct AllOf {
    parts: Vec<Box<dyn PruningPredicate>>,
}

impl AllOf {
    pub fn new(parts: Vec<Box<dyn PruningPredicate>>) -> Self {
        Self { parts }
    }

    pub fn with(mut self, part: impl PruningPredicate + 'static) -> Self {
        self.parts.push(Box::new(part));
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl PruningPredicate for AllOf {
    fn reject(&self, sums: &RawSums, cooker: &Cooker) -> bool {
        self.parts.iter().any(|part| part.reject(sums, cooker))
    }

    fn accepts(&self, outcome: &Outcome) -> bool {
        self.parts.iter().all(|part| part.accepts(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooking::CookingParams;
    use crate::model::ItemBase;

    fn sums(items: &[[u8; 5]]) -> RawSums {
        let bases: Vec<ItemBase> = items.iter().map(|&f| ItemBase::new("x", f, 25, 1)).collect();
        RawSums::of(bases.iter())
    }

    fn cooker(duration: u8, errors: u8, bonus: u8) -> Cooker {
        Cooker::new(CookingParams::new(duration, errors, bonus)).unwrap()
    }

    #[test]
    fn test_min_level() {
        let pred = MinLevel(10);
        let raw = sums(&[[10, 0, 0, 0, 0], [0, 10, 0, 0, 0]]);
        let slow = cooker(60, 0, 0);
        // Raw max is 10, but weakening leaves Dry at 9
        assert!(!pred.reject(&raw, &slow));
        assert!(!pred.accepts(&slow.cook_sums(&raw)));

        // A short session lifts the bound and the outcome
        let fast = cooker(30, 0, 0);
        assert!(!pred.reject(&raw, &fast));
        assert!(pred.accepts(&fast.cook_sums(&raw)));

        let weak = sums(&[[3, 0, 0, 0, 0], [0, 0, 0, 0, 4]]);
        assert!(pred.reject(&weak, &slow));
    }

    #[test]
    fn test_min_flavor() {
        let pred = MinFlavor {
            flavor: Flavor::Sweet,
            min: 5,
        };
        let no_sweet = sums(&[[10, 0, 0, 0, 0], [0, 10, 0, 0, 0]]);
        assert!(pred.reject(&no_sweet, &cooker(60, 0, 0)));

        let sweet = sums(&[[0, 0, 10, 0, 0], [0, 0, 0, 0, 10]]);
        let cooker = cooker(60, 0, 0);
        assert!(!pred.reject(&sweet, &cooker));
        assert!(pred.accepts(&cooker.cook_sums(&sweet)));
    }

    #[test]
    fn test_max_smoothness_is_exact() {
        let pred = MaxSmoothness(22);
        let raw = sums(&[[10, 0, 0, 0, 0], [0, 10, 0, 0, 0]]);
        let cooker = cooker(60, 0, 0);
        // Smoothness is 25 - 2 = 23
        assert!(pred.reject(&raw, &cooker));
        assert!(!pred.accepts(&cooker.cook_sums(&raw)));
        assert!(!MaxSmoothness(23).reject(&raw, &cooker));
        assert!(MaxSmoothness(23).accepts(&cooker.cook_sums(&raw)));
    }

    #[test]
    fn test_all_of() {
        let pred = AllOf::default().with(MinLevel(5)).with(MaxSmoothness(30));
        assert_eq!(pred.len(), 2);
        let ok = Outcome::new([0, 9, 0, 0, 0], 23);
        let rough = Outcome::new([0, 9, 0, 0, 0], 31);
        let weak = Outcome::new([0, 4, 0, 0, 0], 23);
        assert!(pred.accepts(&ok));
        assert!(!pred.accepts(&rough));
        assert!(!pred.accepts(&weak));
        assert!(AllOf::default().accepts(&weak));
    }

    #[test]
    fn test_reject_never_drops_passing_candidates() {
        let berries = [
            [10, 0, 0, 0, 0],
            [0, 10, 0, 0, 0],
            [0, 0, 10, 0, 0],
            [0, 0, 0, 10, 0],
            [0, 0, 0, 0, 10],
            [15, 10, 0, 10, 0],
            [0, 30, 10, 0, 0],
        ];
        let preds: Vec<Box<dyn PruningPredicate>> = vec![
            Box::new(MinLevel(12)),
            Box::new(MinFlavor {
                flavor: Flavor::Dry,
                min: 8,
            }),
            Box::new(MaxSmoothness(21)),
        ];
        for (duration, errors, bonus) in [(60, 0, 0), (35, 2, 0), (90, 0, 6)] {
            let cooker = cooker(duration, errors, bonus);
            for a in 0..berries.len() {
                for b in a + 1..berries.len() {
                    let raw = sums(&[berries[a], berries[b]]);
                    let outcome = cooker.cook_sums(&raw);
                    for pred in &preds {
                        if pred.accepts(&outcome) {
                            assert!(!pred.reject(&raw, &cooker));
                        }
                    }
                }
            }
        }
    }
}
