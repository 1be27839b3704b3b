// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search requests.

use crate::cooking::CookingParams;
use crate::enumerate::validate;
use crate::error::{InvalidArgument, Result};
use crate::memo::ItemTable;
use crate::model::{ItemBase, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the enumeration is spread over threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Execution {
    #[default]
    Sequential,
    /// Split the rank space over `workers` scoped threads. Zero means one
    /// per available core.
    Parallel { workers: usize },
}

/// How a sequential search walks the combinations.
///
/// Parallel searches always use rank-ranged cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumerationStrategy {
    /// Fixed-depth loops.
    #[default]
    Unrolled,
    /// The general predicate-engine enumerator.
    Backtracking,
}

/// Everything a search needs apart from the comparator and predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub pool: Vec<ItemId>,
    /// Combination size.
    pub k: usize,
    /// Number of outcomes to keep.
    pub top_k: usize,
    pub params: CookingParams,
    /// Attach the producing berries to each outcome.
    pub with_recipes: bool,
    pub execution: Execution,
    pub strategy: EnumerationStrategy,
}

impl SearchRequest {
    pub const DEFAULT_TOP_K: usize = 10;

    pub fn new(pool: Vec<ItemId>, k: usize) -> Self {
        Self {
            pool,
            k,
            top_k: Self::DEFAULT_TOP_K,
            params: CookingParams::default(),
            with_recipes: false,
            execution: Execution::default(),
            strategy: EnumerationStrategy::default(),
        }
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn params(mut self, params: CookingParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_recipes(mut self, with_recipes: bool) -> Self {
        self.with_recipes = with_recipes;
        self
    }

    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check every precondition and resolve the pool against the table.
    ///
    /// # Errors
    ///
    /// Fails, before any enumeration, on an unsupported k, an empty or too
    /// small pool, a zero top-K, a zero duration, or an unknown or repeated
    /// pool item.
    pub fn resolve<'t>(&self, table: &'t ItemTable) -> Result<Vec<&'t ItemBase>> {
        validate(self.pool.len(), self.k)?;
        if self.top_k == 0 {
            return Err(InvalidArgument::ZeroTopK.into());
        }
        self.params.validate()?;

        let mut seen = HashSet::with_capacity(self.pool.len());
        let mut items = Vec::with_capacity(self.pool.len());
        for &id in &self.pool {
            items.push(table.lookup(id)?);
            if !seen.insert(id) {
                return Err(InvalidArgument::DuplicateItem(id).into());
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    fn table(n: usize) -> ItemTable {
        ItemTable::new(
            (0..n)
                .map(|i| ItemBase::new(&format!("B{}", i), [i as u8, 0, 0, 0, 0], 20, 1))
                .collect(),
        )
        .unwrap()
    }

    fn ids(values: &[u16]) -> Vec<ItemId> {
        values.iter().map(|&v| ItemId::new(v)).collect()
    }

    fn invalid(request: &SearchRequest, table: &ItemTable) -> InvalidArgument {
        match request.resolve(table) {
            Err(SearchError::InvalidArgument(err)) => err,
            other => panic!("Expected invalid argument, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_resolve() {
        let table = table(4);
        let request = SearchRequest::new(ids(&[3, 1, 2]), 2);
        let items = request.resolve(&table).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "B3");
    }

    #[test]
    fn test_preconditions() {
        let table = table(4);
        assert_eq!(
            invalid(&SearchRequest::new(ids(&[0, 1, 2]), 5), &table),
            InvalidArgument::CombinationSize { k: 5, min: 2, max: 4 }
        );
        assert_eq!(invalid(&SearchRequest::new(vec![], 2), &table), InvalidArgument::EmptyPool);
        assert_eq!(
            invalid(&SearchRequest::new(ids(&[0, 1]), 3), &table),
            InvalidArgument::PoolTooSmall { pool: 2, k: 3 }
        );
        assert_eq!(
            invalid(&SearchRequest::new(ids(&[0, 1]), 2).top_k(0), &table),
            InvalidArgument::ZeroTopK
        );
        assert_eq!(
            invalid(
                &SearchRequest::new(ids(&[0, 1]), 2).params(CookingParams::new(0, 0, 0)),
                &table
            ),
            InvalidArgument::ZeroDuration
        );
        assert_eq!(
            invalid(&SearchRequest::new(ids(&[0, 9]), 2), &table),
            InvalidArgument::UnknownItem(ItemId::new(9))
        );
        assert_eq!(
            invalid(&SearchRequest::new(ids(&[0, 2, 0]), 2), &table),
            InvalidArgument::DuplicateItem(ItemId::new(0))
        );
    }

    #[test]
    fn test_serde_round_trip_of_execution() {
        let json = serde_json::to_string(&Execution::Parallel { workers: 4 }).unwrap();
        assert_eq!(json, r#"{"parallel":{"workers":4}}"#);
        let strategy: EnumerationStrategy = serde_json::from_str(r#""backtracking""#).unwrap();
        assert_eq!(strategy, EnumerationStrategy::Backtracking);
    }
}
