// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Poffin berry-combination search and contest feeding planner.
//!
//! Given a pool of berries, find the K best Poffins that can be cooked from
//! any k of them (k in 2..=4), under a configurable ordering, and sequence
//! the results into a feeding plan that stops once the Pokémon's sheen is
//! full.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Built once and shared read-only, including across worker threads:
//! - [`memo::ItemTable`]: the berry lookup table
//! - [`memo::CombinationTable`]: raw sums of every k-combination of the table
//!
//! ## Tier 2: Per-search Data (Mutable, owned)
//!
//! - [`select::TopK`]: the bounded selector, one per worker
//! - [`search::SearchStatistics`]: counters, one per worker
//! - [`context::EnumerationContext`]: trail-tracked choices of the general
//!   backtracking enumerator
//!
//! # Pipeline
//!
//! ```text
//! pool -> enumerate -> raw sums -> reject? -> cook -> accepts? -> TopK -> plan
//! ```
//!
//! Parallel searches split the lexicographic rank space of the combinations
//! into contiguous ranges, run one selector per range, and merge. The result
//! is identical to a sequential search.

pub mod config;
pub mod context;
pub mod cooking;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod logging;
pub mod memo;
pub mod model;
pub mod plan;
pub mod predicates;
pub mod ranking;
pub mod search;
pub mod select;
pub mod trail;

// Re-export commonly used types
pub use cooking::{Cooker, CookingParams};
pub use error::{InvalidArgument, Result, SearchError};
pub use memo::{CombinationTable, ItemTable};
pub use model::{Category, Flavor, ItemBase, ItemId, Outcome, RawSums, Recipe};
pub use plan::{build_plan, ContestStats, FeedingPlanResult, PlanCandidate, ScoringConfig};
pub use ranking::{Comparator, DefaultComparator, OrderingComparator, PruningPredicate};
pub use search::{EnumerationStrategy, Execution, SearchRequest, SearchResult, Searcher};
pub use select::{Ranked, TopK};
