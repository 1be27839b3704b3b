// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pluggable ordering and filtering of cooked Poffins.
//!
//! - [`Comparator`]: strict "better than" relation driving Top-K selection
//! - [`PruningPredicate`]: hard filter, with an optional sound early reject
//!   evaluated on raw sums before cooking

pub mod comparator;
pub mod prune;

pub use comparator::{Comparator, DefaultComparator, Direction, Field, OrderingComparator, SortKey};
pub use prune::{AllOf, MaxSmoothness, MinFlavor, MinLevel, PruningPredicate};
