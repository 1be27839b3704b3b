// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the search engine.
//!
//! The trail owns a small array of value slots. Every write through
//! [`Trail::set`] records the slot's previous value, so rewinding to a
//! checkpoint restores all slots to their state at that checkpoint in
//! O(changes) time.

/// A single entry in the trail, recording one slot change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    slot: usize,
    old_value: usize,
}

/// Trailed slot storage for O(1) checkpoints and cheap backtracking.
///
/// # Memory Model
///
/// Each enumeration context owns its own trail, so independent searches
/// (for example, one per worker thread) never share trail state.
#[derive(Debug)]
pub struct Trail {
    /// All changes recorded so far, oldest first.
    entries: Vec<TrailEntry>,
    /// Current slot values.
    values: Vec<usize>,
}

impl Trail {
    /// Maximum trail size. A combination of k items writes at most k entries
    /// per path, so this is never reached by a valid search.
    const MAX_SIZE: usize = 16384;

    /// Create a trail with `slots` zero-initialized slots.
    pub fn with_slots(slots: usize) -> Self {
        Self {
            entries: Vec::with_capacity(64),
            values: vec![0; slots],
        }
    }

    /// Current checkpoint (the number of recorded changes).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                self.values[entry.slot] = entry.old_value;
            }
        }
    }

    /// Set a slot, recording its old value.
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range or the trail overflows (both are
    /// bugs in the calling predicate).
    pub fn set(&mut self, slot: usize, value: usize) {
        assert!(slot < self.values.len(), "Trail slot out of range: {}", slot);
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry {
            slot,
            old_value: self.values[slot],
        });
        self.values[slot] = value;
    }

    pub fn get(&self, slot: usize) -> usize {
        self.values[slot]
    }

    /// All slot values.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
