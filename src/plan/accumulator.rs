// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Saturating contest stats.

use crate::model::{Flavor, Outcome, FLAVOR_COUNT};
use serde::{Deserialize, Serialize};

/// Cap of every condition and of sheen.
pub const MAX_STAT: u8 = u8::MAX;

/// Contest conditions (indexed by the flavor that raises them) and sheen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestStats {
    pub conditions: [u8; FLAVOR_COUNT],
    pub sheen: u8,
}

/// Effective increase from feeding one Poffin, after clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gain {
    pub conditions: [u8; FLAVOR_COUNT],
    pub sheen: u8,
}

impl ContestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Condition raised by `flavor`.
    pub fn condition(&self, flavor: Flavor) -> u8 {
        self.conditions[flavor.index()]
    }

    /// Once sheen is full the Pokémon refuses further Poffins.
    pub fn is_saturated(&self) -> bool {
        self.sheen >= MAX_STAT
    }

    /// What feeding `outcome` would add, without feeding it.
    pub fn gain(&self, outcome: &Outcome) -> Gain {
        if self.is_saturated() {
            return Gain::default();
        }
        let mut gain = Gain::default();
        for (index, value) in gain.conditions.iter_mut().enumerate() {
            *value = self.conditions[index].saturating_add(outcome.flavors()[index]) - self.conditions[index];
        }
        gain.sheen = self.sheen.saturating_add(outcome.smoothness()) - self.sheen;
        gain
    }

    /// Feed one Poffin. Returns false, changing nothing, if already saturated.
    pub fn feed(&mut self, outcome: &Outcome) -> bool {
        if self.is_saturated() {
            return false;
        }
        for (condition, &value) in self.conditions.iter_mut().zip(outcome.flavors().iter()) {
            *condition = condition.saturating_add(value);
        }
        self.sheen = self.sheen.saturating_add(outcome.smoothness());
        true
    }
}
