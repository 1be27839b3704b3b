// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search orchestration.
//!
//! Wires enumeration, pruning, cooking and Top-K selection together:
//!
//! ```text
//! combination -> raw sums -> reject? -> cook -> accepts? -> TopK::consider
//! ```
//!
//! Raw sums come from the precomputed [`CombinationTable`] when the pool is
//! the whole item table, otherwise they are summed directly.
//!
//! # Parallelism
//!
//! A parallel search splits the rank space `0..C(n, k)` into contiguous
//! ranges, one per scoped worker thread. Each worker owns its selector and
//! statistics; only the tables, the comparator and the predicate are shared,
//! read-only. Candidates carry their enumeration rank as tie-breaker, so the
//! merged result does not depend on how many workers ran or where the
//! range boundaries fell. A panicking worker aborts the whole search with
//! [`SearchError::WorkerPanicked`].

pub mod partition;
pub mod request;
pub mod statistics;

pub use partition::partition_ranges;
pub use request::{EnumerationStrategy, Execution, SearchRequest};
pub use statistics::{Counter, SearchStatistics};

use crate::cooking::Cooker;
use crate::enumerate::cursor::unrank;
use crate::enumerate::{binomial, for_each_combination, for_each_combination_backtracking, CombinationCursor};
use crate::error::{Result, SearchError};
use crate::memo::{CombinationTable, ItemTable};
use crate::model::{ItemBase, ItemId, Outcome, RawSums, Recipe};
use crate::ranking::{Comparator, PruningPredicate};
use crate::select::{Ranked, TopK};
use serde::Serialize;
use std::ops::Range;
use std::thread;
use tracing::{debug, info, warn};

/// A cooked combination, identified by its lexicographic rank in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    outcome: Outcome,
    rank: u64,
}

impl Candidate {
    pub fn new(outcome: Outcome, rank: u64) -> Self {
        Self { outcome, rank }
    }

    pub fn rank(&self) -> u64 {
        self.rank
    }
}

impl Ranked for Candidate {
    fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    fn tie_rank(&self) -> u64 {
        self.rank
    }
}

/// Final result of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Retained outcomes, best first.
    pub outcomes: Vec<Outcome>,
    /// Producing berries, parallel to `outcomes`, when requested.
    pub recipes: Option<Vec<Recipe>>,
    pub statistics: SearchStatistics,
}

/// Runs searches against a fixed item table.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'t> {
    items: &'t ItemTable,
    combinations: Option<&'t CombinationTable>,
}

impl<'t> Searcher<'t> {
    pub fn new(items: &'t ItemTable) -> Self {
        Self {
            items,
            combinations: None,
        }
    }

    /// Use precomputed sums when a request covers the whole table.
    ///
    /// The combination table must have been built from the same item table.
    pub fn with_combinations(mut self, combinations: &'t CombinationTable) -> Self {
        self.combinations = Some(combinations);
        self
    }

    /// Find the `top_k` best outcomes over every k-combination of the pool.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error before any work if the request is
    /// malformed, or with [`SearchError::WorkerPanicked`] if a parallel
    /// worker panics.
    pub fn run(
        &self,
        request: &SearchRequest,
        comparator: &dyn Comparator,
        predicate: Option<&dyn PruningPredicate>,
    ) -> Result<SearchResult> {
        let items = request.resolve(self.items)?;
        let cooker = Cooker::new(request.params)?;
        let table = self
            .combinations
            .filter(|table| table.k() == request.k && table.is_universe(&request.pool));

        info!(
            pool = items.len(),
            k = request.k,
            top_k = request.top_k,
            execution = ?request.execution,
            strategy = ?request.strategy,
            precomputed = table.is_some(),
            "Search started"
        );

        let job = Job {
            items,
            k: request.k,
            top_k: request.top_k,
            cooker,
            comparator,
            predicate,
            table,
        };
        let partition = match request.execution {
            Execution::Sequential => job.run_sequential(request.strategy)?,
            Execution::Parallel { workers } => job.run_parallel(workers)?,
        };

        let mut statistics = partition.stats;
        let candidates = partition.top.into_sorted_vec();
        statistics.set(Counter::Retained, candidates.len() as u64);

        let recipes = request.with_recipes.then(|| {
            candidates
                .iter()
                .map(|candidate| {
                    let ids: Vec<ItemId> = unrank(job.items.len(), job.k, candidate.rank)
                        .into_iter()
                        .map(|index| request.pool[index])
                        .collect();
                    Recipe::new(candidate.outcome, &ids)
                })
                .collect()
        });
        let outcomes = candidates.into_iter().map(|candidate| candidate.outcome).collect();

        info!(%statistics, "Search finished");
        Ok(SearchResult {
            outcomes,
            recipes,
            statistics,
        })
    }
}

/// One search, shared read-only by every worker.
struct Job<'r> {
    items: Vec<&'r ItemBase>,
    k: usize,
    top_k: usize,
    cooker: Cooker,
    comparator: &'r dyn Comparator,
    predicate: Option<&'r dyn PruningPredicate>,
    table: Option<&'r CombinationTable>,
}

/// Selector and counters owned by one worker.
struct Partition<'r> {
    top: TopK<'r, Candidate, dyn Comparator + 'r>,
    stats: SearchStatistics,
}

impl<'r> Job<'r> {
    fn partition(&self) -> Result<Partition<'r>> {
        Ok(Partition {
            top: TopK::new(self.top_k, self.comparator)?,
            stats: SearchStatistics::new(),
        })
    }

    fn sums(&self, rank: u64, indices: &[usize]) -> RawSums {
        match self.table {
            Some(table) => *table.sums(rank),
            None => RawSums::of(indices.iter().map(|&index| self.items[index])),
        }
    }

    fn evaluate(&self, rank: u64, indices: &[usize], partition: &mut Partition<'r>) {
        let stats = &mut partition.stats;
        stats.increment(Counter::Enumerated);

        let sums = self.sums(rank, indices);
        if let Some(predicate) = self.predicate {
            if predicate.reject(&sums, &self.cooker) {
                stats.increment(Counter::Pruned);
                return;
            }
        }

        let outcome = self.cooker.cook_sums(&sums);
        stats.increment(Counter::Cooked);
        if let Some(predicate) = self.predicate {
            if !predicate.accepts(&outcome) {
                stats.increment(Counter::Filtered);
                return;
            }
        }

        partition.top.consider(Candidate::new(outcome, rank));
    }

    fn run_sequential(&self, strategy: EnumerationStrategy) -> Result<Partition<'r>> {
        let mut partition = self.partition()?;
        let mut rank = 0u64;
        let mut visit = |indices: &[usize]| {
            self.evaluate(rank, indices, &mut partition);
            rank += 1;
        };
        match strategy {
            EnumerationStrategy::Unrolled => for_each_combination(self.items.len(), self.k, &mut visit)?,
            EnumerationStrategy::Backtracking => {
                for_each_combination_backtracking(self.items.len(), self.k, &mut visit)?
            }
        }
        Ok(partition)
    }

    fn run_range(&self, range: Range<u64>) -> Result<Partition<'r>> {
        let mut partition = self.partition()?;
        let (start, end) = (range.start, range.end);
        let mut cursor = CombinationCursor::with_range(self.items.len(), self.k, range)?;
        while let Some((rank, indices)) = cursor.advance() {
            self.evaluate(rank, indices, &mut partition);
        }
        debug!(start, end, retained = partition.top.len(), "Partition finished");
        Ok(partition)
    }

    fn run_parallel(&self, workers: usize) -> Result<Partition<'r>> {
        let workers = if workers == 0 {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        } else {
            workers
        };
        let ranges = partition_ranges(binomial(self.items.len(), self.k), workers);
        debug!(workers, partitions = ranges.len(), "Spawning search workers");

        let results: Vec<Result<Partition<'r>>> = thread::scope(|scope| {
            let handles: Vec<_> = ranges
                .into_iter()
                .map(|range| scope.spawn(move || self.run_range(range)))
                .collect();
            handles
                .into_iter()
                .enumerate()
                .map(|(partition, handle)| match handle.join() {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(partition, "Search worker panicked");
                        Err(SearchError::WorkerPanicked { partition })
                    }
                })
                .collect()
        });

        let mut merged = self.partition()?;
        for result in results {
            let partition = result?;
            merged.stats.merge(&partition.stats);
            merged.top.merge(partition.top);
        }
        Ok(merged)
    }
}
