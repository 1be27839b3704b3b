// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Feeding plans.
//!
//! Poffins raise a Pokémon's five contest conditions and its sheen. Sheen
//! caps at 255 and once it is full no further Poffin can be fed, so the
//! order and choice of Poffins matters. [`build_plan`] greedily picks the
//! next Poffin with the best score against the current stats.

pub mod accumulator;
pub mod builder;

pub use accumulator::{ContestStats, Gain, MAX_STAT};
pub use builder::{build_plan, FeedingPlanResult, PlanCandidate, PlanStep, ScoringConfig};
