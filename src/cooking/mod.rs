// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Outcome simulator: turns a set of berries into a Poffin.
//!
//! # Algorithm
//!
//! 1. Sum each flavor and the smoothness over the berries ([`RawSums`]).
//! 2. Weaken: each flavor loses the sum of the flavor that weakens it
//!    (see [`Flavor::weakened_by`]). Negative results become zero, and every
//!    flavor then loses one point per negative result, floored at zero.
//! 3. Scale each non-zero flavor to the session:
//!    `floor(v * 60 / duration) - errors + bonus`, clamped to `0..=100`.
//! 4. Smoothness is `floor(sum / n) - n` for n berries, clamped to `0..=255`.
//!    The session parameters do not affect it.
//!
//! Level, secondary flavor and category are derived by [`Outcome::new`].
//!
//! Weakening never raises a flavor and scaling is monotone, so
//! [`Cooker::flavor_bound`] gives pruning predicates a sound upper bound
//! before cooking.

pub mod params;

pub use params::CookingParams;

use crate::error::Result;
use crate::memo::ItemTable;
use crate::model::{Flavor, ItemBase, ItemId, Outcome, RawSums, FLAVOR_COUNT, MAX_FLAVOR};

/// Apply the weakening cycle to raw flavor sums.
pub fn weaken(sums: &[u16; FLAVOR_COUNT]) -> [u16; FLAVOR_COUNT] {
    let mut diffs = [0i32; FLAVOR_COUNT];
    for (index, diff) in diffs.iter_mut().enumerate() {
        let weakener = Flavor::from_index(index).weakened_by().index();
        *diff = sums[index] as i32 - sums[weakener] as i32;
    }

    let negatives = diffs.iter().filter(|&&diff| diff < 0).count() as i32;
    let mut weakened = [0u16; FLAVOR_COUNT];
    for (value, &diff) in weakened.iter_mut().zip(diffs.iter()) {
        *value = (diff.max(0) - negatives).max(0) as u16;
    }
    weakened
}

/// Deterministic cooking under fixed session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooker {
    params: CookingParams,
}

impl Cooker {
    /// # Errors
    ///
    /// Fails if the duration is zero.
    pub fn new(params: CookingParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CookingParams {
        &self.params
    }

    /// Cook a set of berries.
    pub fn cook(&self, items: &[&ItemBase]) -> Outcome {
        self.cook_sums(&RawSums::of(items.iter().copied()))
    }

    /// Cook from precomputed raw sums.
    pub fn cook_sums(&self, sums: &RawSums) -> Outcome {
        let weakened = weaken(&sums.flavors);
        let mut flavors = [0u8; FLAVOR_COUNT];
        for (flavor, &value) in flavors.iter_mut().zip(weakened.iter()) {
            *flavor = self.scale(value);
        }
        Outcome::new(flavors, smoothness(sums))
    }

    /// Re-cook a stored berry sequence.
    ///
    /// # Errors
    ///
    /// Fails if an id is not in the table.
    pub fn cook_ids(&self, table: &ItemTable, ids: &[ItemId]) -> Result<Outcome> {
        let mut sums = RawSums::new();
        for &id in ids {
            sums.add(table.lookup(id)?);
        }
        Ok(self.cook_sums(&sums))
    }

    /// Scale one weakened flavor to the session. Zero stays zero.
    pub fn scale(&self, value: u16) -> u8 {
        if value == 0 {
            return 0;
        }
        let scaled = value as i32 * CookingParams::REFERENCE_DURATION as i32
            / self.params.duration as i32
            - self.params.errors as i32
            + self.params.bonus as i32;
        scaled.clamp(0, MAX_FLAVOR as i32) as u8
    }

    /// Upper bound on the cooked magnitude of `flavor` given raw sums.
    pub fn flavor_bound(&self, sums: &RawSums, flavor: Flavor) -> u8 {
        self.scale(sums.flavor(flavor))
    }

    /// Upper bound on the cooked level given raw sums.
    pub fn level_bound(&self, sums: &RawSums) -> u8 {
        self.scale(sums.max_flavor())
    }
}

/// Smoothness of a cooked set: the average berry smoothness less the count.
pub fn smoothness(sums: &RawSums) -> u8 {
    let count = sums.count.max(1) as i32;
    let value = sums.smoothness as i32 / count - sums.count as i32;
    value.clamp(0, u8::MAX as i32) as u8
}
