// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore state on
//! backtracking. It drives the general k-combination enumerator in
//! [`crate::enumerate::backtrack`].
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A deterministic success (try_pred returning Success or
//! SuccessSamePredicate) leaves no alternatives behind: backtracking into
//! that entry pops it.

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::EnumerationContext;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }

    /// Mark as having no alternatives left, so backtracking pops it.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine<'a> {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate + 'a>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl<'a> SearchEngine<'a> {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate + 'a>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended
    /// - `None` if exhausted (backtracked past the first predicate)
    ///
    /// Results are reported via side effects of the predicates, not by the
    /// return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without a terminal
    /// predicate, or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut EnumerationContext) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }

        self.stack.push(StackEntry::new(0, 0, ctx.trail.checkpoint()));

        loop {
            let entry = self.stack.last_mut()?;

            // Rewind trail to this entry's checkpoint
            ctx.trail.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            let result = if !entry.in_choice_mode {
                self.try_count += 1;
                self.predicates[pred_idx].try_pred(ctx, round)
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);
                if matches!(result, PredicateResult::Choices(_) | PredicateResult::Suspend) {
                    panic!("retry_pred returned invalid result: {:?}", result);
                }
                result
            };

            match result {
                PredicateResult::Success => {
                    self.leave_current_entry();
                    self.push_next_predicate(ctx, pred_idx);
                }
                PredicateResult::SuccessSamePredicate => {
                    self.leave_current_entry();
                    self.stack
                        .push(StackEntry::new(pred_idx, round + 1, ctx.trail.checkpoint()));
                }
                PredicateResult::Failure => {
                    // In choice mode, the next iteration tries the next choice
                    if let Some(entry) = self.stack.last() {
                        if !entry.in_choice_mode {
                            self.stack.pop();
                        }
                    }
                }
                PredicateResult::Choices(n) => {
                    if let Some(entry) = self.stack.last_mut() {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                        entry.trail_checkpoint = ctx.trail.checkpoint();
                    }
                }
                PredicateResult::Suspend => {
                    return Some(self);
                }
            }
        }
    }

    /// After a success, the current entry stays on the stack for
    /// backtracking; a deterministic one has nothing left to try.
    fn leave_current_entry(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            if !entry.in_choice_mode {
                entry.exhaust();
            }
        }
    }

    /// Push a new stack entry for the predicate after `current`.
    fn push_next_predicate(&mut self, ctx: &EnumerationContext, current: usize) {
        let next_index = current + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that assembles a predicate program ending in a terminal predicate.
pub struct EngineBuilder<'a> {
    predicates: Vec<Box<dyn Predicate + 'a>>,
}

/// A builder whose program has been terminated and can be built.
pub struct TerminatedBuilder<'a> {
    predicates: Vec<Box<dyn Predicate + 'a>>,
}

impl<'a> EngineBuilder<'a> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate + 'a>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<T: TerminalPredicate + 'a>(mut self, predicate: Box<T>) -> TerminatedBuilder<'a> {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

impl<'a> Default for EngineBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TerminatedBuilder<'a> {
    pub fn build(self) -> SearchEngine<'a> {
        SearchEngine::new(self.predicates)
    }
}
