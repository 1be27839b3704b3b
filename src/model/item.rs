// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Berry identity and base attributes.

use crate::model::flavor::{Flavor, FLAVOR_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an entry in the item table.
///
/// Equality and ordering use the underlying integer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u16);

impl ItemId {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Get the id as a usize (for table indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Base attributes contributed by one berry.
///
/// Owned by the item table and read-only for the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBase {
    pub name: String,

    /// Flavor contributions, indexed by [`Flavor::index`].
    pub flavors: [u8; FLAVOR_COUNT],

    pub smoothness: u8,

    /// Rarity tier; used as the item cost when planning.
    #[serde(default = "default_rarity")]
    pub rarity: u8,
}

fn default_rarity() -> u8 {
    1
}

impl ItemBase {
    pub fn new(name: &str, flavors: [u8; FLAVOR_COUNT], smoothness: u8, rarity: u8) -> Self {
        Self {
            name: name.to_string(),
            flavors,
            smoothness,
            rarity,
        }
    }

    pub fn flavor(&self, flavor: Flavor) -> u8 {
        self.flavors[flavor.index()]
    }
}
