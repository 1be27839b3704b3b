// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Each worker owns its own counters; the orchestrator merges them after the
//! join barrier.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumCountMacro, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counter {
    /// Combinations visited.
    Enumerated,
    /// Rejected from raw sums, before cooking.
    Pruned,
    /// Cooked, then refused by the predicate.
    Filtered,
    Cooked,
    /// Entries in the final result.
    Retained,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    stats: [u64; Counter::COUNT],
}

impl SearchStatistics {
    pub fn new() -> Self {
        SearchStatistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    pub fn set(&mut self, counter: Counter, value: u64) {
        self.stats[counter as usize] = value;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// Add another worker's counters to these.
    pub fn merge(&mut self, other: &SearchStatistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        Counter::iter().map(move |counter| (counter, self.get(counter)))
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (counter, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", counter, value)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for SearchStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Counter::COUNT))?;
        for (counter, value) in self.iter() {
            map.serialize_entry(&counter.to_string(), &value)?;
        }
        map.end()
    }
}
