// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Value types shared by every stage of the pipeline.
//!
//! - Flavor: the five flavor dimensions and their weakening cycle
//! - ItemId / ItemBase: berry identity and base attributes
//! - RawSums: pre-weakening aggregate of a berry subset
//! - Outcome / Category: a cooked Poffin
//! - Recipe: an Outcome together with the berries that produced it

pub mod flavor;
pub mod item;
pub mod outcome;
pub mod recipe;
pub mod sums;

pub use flavor::{Flavor, FLAVOR_COUNT};
pub use item::{ItemBase, ItemId};
pub use outcome::{Category, Outcome, MAX_FLAVOR, MILD_DOMINANCE, MILD_LEVEL};
pub use recipe::Recipe;
pub use sums::RawSums;
