// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded Top-K selection.
//!
//! [`TopK`] keeps the K best entries of a stream under a [`Comparator`],
//! using O(K) memory and O(log K) work per entry. The result is the same as
//! sorting the whole stream and keeping the first K.
//!
//! # Heap layout
//!
//! Entries live in an implicit binary heap whose root is the *worst* held
//! entry: every parent is beaten-or-tied by each of its children. A new
//! entry only has to beat the root to get in.
//!
//! # Ties
//!
//! Entries the comparator cannot separate are ordered by [`Ranked::tie_rank`],
//! lower first. Unique tie ranks make the order total, so the retained set
//! does not depend on the order entries are considered in, and merging
//! selectors gives the same result as one selector over the whole stream.
//! With equal tie ranks the incumbent wins.

use crate::error::{InvalidArgument, Result};
use crate::model::{Outcome, Recipe};
use crate::ranking::Comparator;
use std::cmp::Ordering;

/// Largest capacity reserved up front.
const MAX_RESERVE: usize = 4096;

/// Something with an outcome that can be ranked.
pub trait Ranked {
    fn outcome(&self) -> &Outcome;

    /// Secondary key for entries the comparator considers equal.
    fn tie_rank(&self) -> u64 {
        0
    }
}

impl Ranked for Outcome {
    fn outcome(&self) -> &Outcome {
        self
    }
}

impl Ranked for Recipe {
    fn outcome(&self) -> &Outcome {
        Recipe::outcome(self)
    }
}

/// Fixed-capacity selector of the best entries seen so far.
pub struct TopK<'c, T, C: ?Sized> {
    capacity: usize,
    heap: Vec<T>,
    comparator: &'c C,
}

impl<'c, T, C> TopK<'c, T, C>
where
    T: Ranked,
    C: Comparator + ?Sized,
{
    /// # Errors
    ///
    /// Fails if `capacity` is zero.
    pub fn new(capacity: usize, comparator: &'c C) -> Result<Self> {
        if capacity == 0 {
            return Err(InvalidArgument::ZeroTopK.into());
        }
        Ok(Self {
            capacity,
            heap: Vec::with_capacity(capacity.min(MAX_RESERVE)),
            comparator,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The held entry that would be evicted next.
    pub fn worst(&self) -> Option<&T> {
        self.heap.first()
    }

    /// True if an entry with this outcome and tie rank would be retained.
    pub fn admits(&self, outcome: &Outcome, tie_rank: u64) -> bool {
        match self.heap.first() {
            Some(root) if self.heap.len() >= self.capacity => {
                self.beats(outcome, tie_rank, root.outcome(), root.tie_rank())
            }
            _ => true,
        }
    }

    /// Offer an entry. Returns true if it was retained.
    pub fn consider(&mut self, item: T) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(item);
            self.sift_up(self.heap.len() - 1);
            return true;
        }
        if !self.admits(item.outcome(), item.tie_rank()) {
            return false;
        }
        self.heap[0] = item;
        self.sift_down(0);
        true
    }

    /// Fold another selector's entries into this one.
    pub fn merge<D: Comparator + ?Sized>(&mut self, other: TopK<'_, T, D>) {
        for item in other.heap {
            self.consider(item);
        }
    }

    /// Held entries, in no particular order.
    pub fn results(&self) -> &[T] {
        &self.heap
    }

    pub fn into_results(self) -> Vec<T> {
        self.heap
    }

    /// Held entries, best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let comparator = self.comparator;
        let mut items = self.heap;
        items.sort_by(|a, b| order(comparator, a, b));
        items
    }

    fn beats(&self, a: &Outcome, a_tie: u64, b: &Outcome, b_tie: u64) -> bool {
        if self.comparator.is_better(a, b) {
            return true;
        }
        !self.comparator.is_better(b, a) && a_tie < b_tie
    }

    /// True if the entry at `a` should sit below the entry at `b`.
    fn beats_at(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.heap[a], &self.heap[b]);
        self.beats(a.outcome(), a.tie_rank(), b.outcome(), b.tie_rank())
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.beats_at(parent, index) {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // The worse child is the one the other beats
            let worse = if right < len && self.beats_at(left, right) {
                right
            } else {
                left
            };
            if !self.beats_at(index, worse) {
                break;
            }
            self.heap.swap(index, worse);
            index = worse;
        }
    }
}

/// Best-first order of two ranked entries.
pub fn order<T: Ranked, C: Comparator + ?Sized>(comparator: &C, a: &T, b: &T) -> Ordering {
    comparator
        .ordering(a.outcome(), b.outcome())
        .then_with(|| a.tie_rank().cmp(&b.tie_rank()))
}
