// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flavor dimensions.
//!
//! Declaration order is the priority order used to break ties between
//! flavors of equal magnitude: Spicy > Dry > Sweet > Bitter > Sour.
//!
//! # Weakening cycle
//!
//! Each flavor is weakened by exactly one other flavor, forming a 5-cycle:
//!
//! ```text
//! Spicy <- Dry <- Sweet <- Bitter <- Sour <- Spicy
//! ```
//!
//! (read "Spicy is weakened by Dry").

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// A flavor dimension.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCountMacro,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Flavor {
    Spicy,
    Dry,
    Sweet,
    Bitter,
    Sour,
}

/// Number of flavor dimensions.
pub const FLAVOR_COUNT: usize = Flavor::COUNT;

const ALL: [Flavor; FLAVOR_COUNT] = [
    Flavor::Spicy,
    Flavor::Dry,
    Flavor::Sweet,
    Flavor::Bitter,
    Flavor::Sour,
];

impl Flavor {
    /// Get the flavor as a usize (for array indexing).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a flavor by array index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= FLAVOR_COUNT`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < FLAVOR_COUNT, "Flavor index out of range: {}", index);
        ALL[index]
    }

    /// The flavor that weakens this one.
    pub fn weakened_by(self) -> Self {
        Self::from_index((self.index() + 1) % FLAVOR_COUNT)
    }

    /// Contest condition raised by feeding a Poffin of this flavor.
    pub fn condition(self) -> &'static str {
        match self {
            Flavor::Spicy => "Cool",
            Flavor::Dry => "Beauty",
            Flavor::Sweet => "Cute",
            Flavor::Bitter => "Smart",
            Flavor::Sour => "Tough",
        }
    }

    /// Capitalized name, as used in Poffin names.
    pub fn title(self) -> &'static str {
        match self {
            Flavor::Spicy => "Spicy",
            Flavor::Dry => "Dry",
            Flavor::Sweet => "Sweet",
            Flavor::Bitter => "Bitter",
            Flavor::Sour => "Sour",
        }
    }
}
