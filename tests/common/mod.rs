// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use poffin_search::select::Ranked;
use poffin_search::{ItemBase, ItemTable, Outcome};
use std::path::PathBuf;

/// Path of the sample berry table shipped with the crate.
pub fn demo_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/berries.toml")
}

/// The sample berry table.
pub fn demo_table() -> ItemTable {
    ItemTable::load(&demo_table_path()).expect("demo table loads")
}

/// Five single-flavor berries, one per flavor.
pub fn five_berries() -> ItemTable {
    ItemTable::new(vec![
        ItemBase::new("Cheri", [10, 0, 0, 0, 0], 25, 1),
        ItemBase::new("Chesto", [0, 10, 0, 0, 0], 25, 1),
        ItemBase::new("Pecha", [0, 0, 10, 0, 0], 25, 1),
        ItemBase::new("Rawst", [0, 0, 0, 10, 0], 25, 1),
        ItemBase::new("Aspear", [0, 0, 0, 0, 10], 25, 1),
    ])
    .expect("five berries fit")
}

/// An outcome with a distinct rank, for exact selector comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub outcome: Outcome,
    pub rank: u64,
}

impl Ranked for Tagged {
    fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    fn tie_rank(&self) -> u64 {
        self.rank
    }
}

/// Tag outcomes with their position in the stream.
pub fn tagged(outcomes: &[Outcome]) -> Vec<Tagged> {
    outcomes
        .iter()
        .enumerate()
        .map(|(rank, &outcome)| Tagged {
            outcome,
            rank: rank as u64,
        })
        .collect()
}
