// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cooked Poffins.
//!
//! An [`Outcome`] is built once from its five flavor magnitudes and its
//! smoothness; every other field (level, secondary level, primary and
//! secondary flavor, category) is derived at construction and never changes.

use crate::model::flavor::{Flavor, FLAVOR_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Largest flavor magnitude a Poffin can carry.
pub const MAX_FLAVOR: u8 = 100;

/// Lowest level of a Mild Poffin.
pub const MILD_LEVEL: u8 = 50;

/// A Mild Poffin's dominant flavor is at least this many times the runner-up.
pub const MILD_DOMINANCE: u8 = 2;

/// Kind of Poffin.
///
/// Declaration order is the category identity order used by comparators:
/// earlier variants rank ahead of later ones.
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
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Several flavors, the dominant one at or above [`MILD_LEVEL`] and at
    /// least [`MILD_DOMINANCE`] times the runner-up.
    Mild,
    /// Exactly one non-zero flavor.
    Single,
    /// Two non-zero flavors.
    Double,
    /// Three non-zero flavors.
    Rich,
    /// Four or more non-zero flavors.
    Overripe,
    /// No flavor but some smoothness: raises sheen only.
    Null,
    /// No flavor and no smoothness.
    Foul,
}

impl Category {
    /// Classify a set of flavor magnitudes and smoothness.
    pub fn classify(flavors: &[u8; FLAVOR_COUNT], smoothness: u8) -> Self {
        let mut sorted = *flavors;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let (level, runner_up) = (sorted[0], sorted[1]);

        match flavors.iter().filter(|&&v| v > 0).count() {
            0 if smoothness == 0 => Category::Foul,
            0 => Category::Null,
            1 => Category::Single,
            _ if level >= MILD_LEVEL && level >= runner_up.saturating_mul(MILD_DOMINANCE) => {
                Category::Mild
            }
            2 => Category::Double,
            3 => Category::Rich,
            _ => Category::Overripe,
        }
    }

    /// Numeric identity (declaration order), used by field comparators.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// A cooked Poffin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Outcome {
    flavors: [u8; FLAVOR_COUNT],
    smoothness: u8,
    level: u8,
    second_level: u8,
    primary: Option<Flavor>,
    secondary: Option<Flavor>,
    category: Category,
}

impl Outcome {
    /// Build an outcome from clamped flavor magnitudes and smoothness.
    ///
    /// # Panics
    ///
    /// Panics if any flavor exceeds [`MAX_FLAVOR`]; the cooker clamps before
    /// calling this.
    pub fn new(flavors: [u8; FLAVOR_COUNT], smoothness: u8) -> Self {
        assert!(
            flavors.iter().all(|&v| v <= MAX_FLAVOR),
            "Flavor magnitude out of range: {:?}",
            flavors
        );

        // Strict comparison keeps the earliest flavor on ties
        let mut level = 0;
        let mut primary = None;
        for flavor in Flavor::iter() {
            let value = flavors[flavor.index()];
            if value > level {
                level = value;
                primary = Some(flavor);
            }
        }

        // Second-highest distinct magnitude: values tied with the level
        // do not count
        let mut second_level = 0;
        let mut secondary = None;
        for flavor in Flavor::iter() {
            let value = flavors[flavor.index()];
            if value < level && value > second_level {
                second_level = value;
                secondary = Some(flavor);
            }
        }

        Self {
            flavors,
            smoothness,
            level,
            second_level,
            primary,
            secondary,
            category: Category::classify(&flavors, smoothness),
        }
    }

    pub fn flavors(&self) -> &[u8; FLAVOR_COUNT] {
        &self.flavors
    }

    pub fn flavor(&self, flavor: Flavor) -> u8 {
        self.flavors[flavor.index()]
    }

    pub fn smoothness(&self) -> u8 {
        self.smoothness
    }

    /// Highest flavor magnitude.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Second-highest distinct flavor magnitude; 0 if there is none.
    pub fn second_level(&self) -> u8 {
        self.second_level
    }

    pub fn primary(&self) -> Option<Flavor> {
        self.primary
    }

    /// Flavor holding [`Outcome::second_level`].
    pub fn secondary(&self) -> Option<Flavor> {
        self.secondary
    }

    /// Non-zero flavors, strongest first, priority order among equals.
    pub fn ranked_flavors(&self) -> Vec<Flavor> {
        let mut ranked: Vec<Flavor> = Flavor::iter().filter(|&f| self.flavor(f) > 0).collect();
        ranked.sort_by(|&a, &b| self.flavor(b).cmp(&self.flavor(a)));
        ranked
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Sum of all flavor magnitudes.
    pub fn flavor_total(&self) -> u16 {
        self.flavors.iter().map(|&v| v as u16).sum()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranked = self.ranked_flavors();
        match (self.category, ranked.as_slice()) {
            (Category::Single, [only]) => write!(f, "{} Poffin", only.title())?,
            (Category::Double, [first, second]) => {
                write!(f, "{}-{} Poffin", first.title(), second.title())?
            }
            (Category::Mild, _) => write!(f, "Mild Poffin")?,
            (Category::Rich, _) => write!(f, "Rich Poffin")?,
            (Category::Overripe, _) => write!(f, "Overripe Poffin")?,
            (Category::Null, _) => write!(f, "Null Poffin")?,
            _ => write!(f, "Foul Poffin")?,
        }
        write!(f, " (Lv. {}, smoothness {})", self.level, self.smoothness)
    }
}
