// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A Poffin together with the berries that produced it.

use crate::model::item::ItemId;
use crate::model::outcome::Outcome;
use serde::Serialize;

/// An outcome paired with its producing berry sequence.
///
/// The sequence is copied into the recipe at construction, so the caller's
/// buffer can be reused for the next candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Recipe {
    outcome: Outcome,
    items: Box<[ItemId]>,
}

impl Recipe {
    pub fn new(outcome: Outcome, items: &[ItemId]) -> Self {
        Self {
            outcome,
            items: items.into(),
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }
}
