// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, or offer a number of alternatives.
//!
//! # Example
//!
//! ```
//! use poffin_search::engine::{Predicate, PredicateResult};
//! use poffin_search::context::EnumerationContext;
//!
//! #[derive(Debug)]
//! struct FirstIndex;
//!
//! impl Predicate for FirstIndex {
//!     fn try_pred(&mut self, ctx: &mut EnumerationContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(ctx.pool_len())
//!     }
//!
//!     fn retry_pred(&mut self, ctx: &mut EnumerationContext, _round: usize, choice: usize) -> PredicateResult {
//!         ctx.choose(0, choice);
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FirstIndex"
//!     }
//! }
//! ```

use crate::context::EnumerationContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (for iterative predicates)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution for inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute once per combination slot.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a program.
///
/// Terminal predicates fail or suspend; they never return Success.
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// this trait, so every built program ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for each choice in turn
///
/// # Trail Integration
///
/// Predicates write chosen indices through the context, which records them
/// on the trail. The engine rewinds the trail before every retry, so each
/// alternative starts from the state that existed before the first one.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut EnumerationContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// May return `Success`, `SuccessSamePredicate` or `Failure`; never
    /// `Choices` or `Suspend`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut EnumerationContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for this predicate (for debugging).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
