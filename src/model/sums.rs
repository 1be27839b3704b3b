// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Raw (pre-weakening) aggregate of a berry subset.
//!
//! This is the partial aggregate seen by pruning predicates and stored by the
//! precomputed combination table. It is the only input the cooker needs, so
//! cooking from a table row and cooking from the berries themselves agree
//! bit-for-bit.

use crate::model::flavor::{Flavor, FLAVOR_COUNT};
use crate::model::item::ItemBase;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RawSums {
    pub flavors: [u16; FLAVOR_COUNT],
    pub smoothness: u16,
    /// Number of berries summed.
    pub count: u8,
}

impl RawSums {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum the attributes of a subset of berries.
    pub fn of<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ItemBase>,
    {
        let mut sums = Self::new();
        for item in items {
            sums.add(item);
        }
        sums
    }

    /// Add one berry to the aggregate.
    pub fn add(&mut self, item: &ItemBase) {
        for (sum, &value) in self.flavors.iter_mut().zip(item.flavors.iter()) {
            *sum += value as u16;
        }
        self.smoothness += item.smoothness as u16;
        self.count += 1;
    }

    pub fn flavor(&self, flavor: Flavor) -> u16 {
        self.flavors[flavor.index()]
    }

    /// Largest raw flavor sum. An upper bound on the cooked level before scaling.
    pub fn max_flavor(&self) -> u16 {
        self.flavors.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_of_items() {
        let a = ItemBase::new("Cheri", [10, 0, 0, 0, 0], 25, 1);
        let b = ItemBase::new("Tamato", [20, 10, 0, 0, 0], 30, 2);
        let sums = RawSums::of([&a, &b]);
        assert_eq!(sums.flavors, [30, 10, 0, 0, 0]);
        assert_eq!(sums.smoothness, 55);
        assert_eq!(sums.count, 2);
        assert_eq!(sums.flavor(Flavor::Dry), 10);
        assert_eq!(sums.max_flavor(), 30);
    }

    #[test]
    fn test_empty_sums() {
        let sums = RawSums::of(std::iter::empty::<&ItemBase>());
        assert_eq!(sums, RawSums::default());
        assert_eq!(sums.max_flavor(), 0);
    }
}
