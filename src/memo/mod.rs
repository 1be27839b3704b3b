// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable, precomputed data.
//!
//! Both tables are explicitly constructed once and then shared read-only by
//! every search (and every worker thread of a parallel search):
//!
//! - [`ItemTable`]: the berry lookup table, indexed by [`ItemId`]
//! - [`CombinationTable`]: raw sums of every k-combination of the whole
//!   table, indexed by lexicographic rank
//!
//! [`ItemId`]: crate::model::ItemId

pub mod combinations;
pub mod items;

pub use combinations::CombinationTable;
pub use items::ItemTable;
