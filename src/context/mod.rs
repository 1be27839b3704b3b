// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration context for the backtracking engine.
//!
//! The context combines the fixed shape of the enumeration (pool length and
//! combination size) with the mutable, trail-tracked choice of one pool index
//! per round. The engine rewinds the trail on backtrack, so predicates only
//! ever write forward.
//!
//! # Memory Model
//!
//! ```text
//! EnumerationContext {
//!     pool_len, size,   // immutable shape
//!     trail: Trail,     // one slot per round, mutable, owned
//! }
//! ```

use crate::trail::Trail;

#[derive(Debug)]
pub struct EnumerationContext {
    /// Chosen pool index per round, trail-tracked.
    pub trail: Trail,
    pool_len: usize,
    size: usize,
}

impl EnumerationContext {
    /// Create a context choosing `size` indices out of `0..pool_len`.
    pub fn new(pool_len: usize, size: usize) -> Self {
        Self {
            trail: Trail::with_slots(size),
            pool_len,
            size,
        }
    }

    pub fn pool_len(&self) -> usize {
        self.pool_len
    }

    /// Number of indices in a complete combination.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Choose `index` for `round` (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if round >= size.
    pub fn choose(&mut self, round: usize, index: usize) {
        assert!(round < self.size, "Round out of bounds: {}", round);
        self.trail.set(round, index);
    }

    /// Index chosen for `round`.
    pub fn chosen_index(&self, round: usize) -> usize {
        self.trail.get(round)
    }

    /// All chosen indices. Only meaningful once every round has chosen.
    pub fn chosen(&self) -> &[usize] {
        self.trail.values()
    }
}
