// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed raw sums for every k-combination of the item table.
//!
//! Raw sums do not depend on the cooking parameters, so a single table
//! serves any number of searches over the whole table that differ only in
//! duration, errors, bonus, ordering or pruning.
//!
//! # Memory
//!
//! One [`RawSums`] (14 bytes) per combination: C(64, 4) = 635,376 rows is
//! about 9 MB.

use crate::enumerate::{binomial, for_each_combination, validate};
use crate::error::Result;
use crate::memo::items::ItemTable;
use crate::model::{ItemId, RawSums};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CombinationTable {
    k: usize,
    universe: usize,
    /// Indexed by lexicographic rank.
    sums: Vec<RawSums>,
}

impl CombinationTable {
    /// Sum every k-combination of the whole item table.
    ///
    /// # Errors
    ///
    /// Fails if k is not a supported combination size for the table.
    pub fn build(table: &ItemTable, k: usize) -> Result<Self> {
        validate(table.len(), k)?;
        let items: Vec<_> = table.iter().map(|(_, item)| item).collect();

        let total = binomial(items.len(), k);
        let mut sums = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
        for_each_combination(items.len(), k, |indices| {
            sums.push(RawSums::of(indices.iter().map(|&index| items[index])));
        })?;

        debug!(k, items = items.len(), rows = sums.len(), "Built combination table");
        Ok(Self {
            k,
            universe: items.len(),
            sums,
        })
    }

    /// Combination size of every row.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Raw sums of the combination at `rank`.
    ///
    /// # Panics
    ///
    /// Panics if rank >= len().
    #[inline]
    pub fn sums(&self, rank: u64) -> &RawSums {
        &self.sums[rank as usize]
    }

    /// True if `pool` is exactly the table this was built from, in
    /// ascending id order, so that pool ranks and table ranks coincide.
    pub fn is_universe(&self, pool: &[ItemId]) -> bool {
        pool.len() == self.universe
            && pool
                .iter()
                .enumerate()
                .all(|(index, id)| id.as_usize() == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::cursor::rank;
    use crate::model::ItemBase;

    fn table() -> ItemTable {
        ItemTable::new(vec![
            ItemBase::new("A", [10, 0, 0, 0, 0], 20, 1),
            ItemBase::new("B", [0, 10, 0, 0, 0], 25, 1),
            ItemBase::new("C", [0, 0, 10, 0, 0], 30, 1),
            ItemBase::new("D", [0, 0, 0, 10, 5], 35, 1),
            ItemBase::new("E", [0, 0, 0, 0, 10], 40, 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_rows_indexed_by_rank() {
        let items = table();
        let combos = CombinationTable::build(&items, 3).unwrap();
        assert_eq!(combos.k(), 3);
        assert_eq!(combos.len(), 10);

        // {B, D, E}
        let row = combos.sums(rank(5, &[1, 3, 4]));
        assert_eq!(row.flavors, [0, 10, 0, 10, 15]);
        assert_eq!(row.smoothness, 100);
        assert_eq!(row.count, 3);
    }

    #[test]
    fn test_universe_detection() {
        let items = table();
        let combos = CombinationTable::build(&items, 2).unwrap();
        assert!(combos.is_universe(&items.ids()));

        let reordered: Vec<ItemId> = [1, 0, 2, 3, 4].iter().map(|&i| ItemId::new(i)).collect();
        assert!(!combos.is_universe(&reordered));
        assert!(!combos.is_universe(&items.ids()[..4]));
    }

    #[test]
    fn test_rejects_bad_k() {
        assert!(CombinationTable::build(&table(), 5).is_err());
        assert!(CombinationTable::build(&ItemTable::default(), 2).is_err());
    }
}
