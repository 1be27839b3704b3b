// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy feeding-plan construction.
//!
//! # Score
//!
//! Against the current stats, a candidate scores
//!
//! ```text
//! sum(weight[f] * gain[f]) - sheen_penalty * sheen_gain - cost_penalty * cost
//! ```
//!
//! where gains are the effective (clamped) increases. The builder repeatedly
//! feeds the best-scoring remaining candidate (ties: lower cost, then earlier
//! position) until sheen is full or candidates run out.

use crate::error::{Result, SearchError};
use crate::memo::ItemTable;
use crate::model::{ItemId, Outcome, Recipe, FLAVOR_COUNT};
use crate::plan::accumulator::{ContestStats, Gain};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Value of one point of each condition, indexed by flavor.
    pub weights: [f64; FLAVOR_COUNT],
    /// Cost of one point of sheen.
    pub sheen_penalty: f64,
    /// Cost of one rarity point of berries.
    pub cost_penalty: f64,
    /// Collapse candidates with identical flavors and smoothness.
    pub dedupe: bool,
    /// Stats before the first feeding.
    pub initial: ContestStats,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: [1.0; FLAVOR_COUNT],
            sheen_penalty: 0.0,
            cost_penalty: 0.0,
            dedupe: true,
            initial: ContestStats::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        let finite = self.weights.iter().all(|w| w.is_finite())
            && self.sheen_penalty.is_finite()
            && self.cost_penalty.is_finite();
        if !finite {
            return Err(SearchError::Config(
                "Plan weights and penalties must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn score(&self, gain: &Gain, cost: u32) -> f64 {
        let conditions: f64 = self
            .weights
            .iter()
            .zip(gain.conditions.iter())
            .map(|(&weight, &value)| weight * value as f64)
            .sum();
        conditions - self.sheen_penalty * gain.sheen as f64 - self.cost_penalty * cost as f64
    }
}

/// A Poffin offered to the plan builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCandidate {
    pub outcome: Outcome,
    /// Producing berries, when known.
    pub items: Option<Vec<ItemId>>,
    /// Total rarity of the berries.
    pub cost: u32,
}

impl From<Outcome> for PlanCandidate {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcome,
            items: None,
            cost: 0,
        }
    }
}

impl PlanCandidate {
    /// Candidate costed by the rarity of its berries.
    ///
    /// # Errors
    ///
    /// Fails if a berry is not in the table.
    pub fn from_recipe(recipe: &Recipe, table: &ItemTable) -> Result<Self> {
        let mut cost = 0u32;
        for &id in recipe.items() {
            cost += table.lookup(id)?.rarity as u32;
        }
        Ok(Self {
            outcome: *recipe.outcome(),
            items: Some(recipe.items().to_vec()),
            cost,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStep {
    pub candidate: PlanCandidate,
    pub score: f64,
    /// Stats after feeding this step.
    pub stats: ContestStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedingPlanResult {
    pub steps: Vec<PlanStep>,
    pub final_stats: ContestStats,
    pub total_score: f64,
    pub total_cost: u64,
}

/// Keep the cheapest of each group of identical Poffins, at the position of
/// the group's first member.
fn dedupe(candidates: Vec<PlanCandidate>) -> Vec<PlanCandidate> {
    let mut kept: Vec<PlanCandidate> = Vec::with_capacity(candidates.len());
    let mut positions: HashMap<([u8; FLAVOR_COUNT], u8), usize> = HashMap::new();
    for candidate in candidates {
        let key = (*candidate.outcome.flavors(), candidate.outcome.smoothness());
        match positions.get(&key) {
            Some(&position) => {
                if candidate.cost < kept[position].cost {
                    kept[position] = candidate;
                }
            }
            None => {
                positions.insert(key, kept.len());
                kept.push(candidate);
            }
        }
    }
    kept
}

/// Greedily order candidates into a feeding plan.
pub fn build_plan<I>(candidates: I, config: &ScoringConfig) -> FeedingPlanResult
where
    I: IntoIterator<Item = PlanCandidate>,
{
    let mut remaining: Vec<PlanCandidate> = candidates.into_iter().collect();
    if config.dedupe {
        remaining = dedupe(remaining);
    }

    let mut stats = config.initial;
    let mut steps = Vec::new();
    let mut total_score = 0.0;
    let mut total_cost = 0u64;

    while !stats.is_saturated() && !remaining.is_empty() {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, candidate) in remaining.iter().enumerate() {
            let score = config.score(&stats.gain(&candidate.outcome), candidate.cost);
            let better = match score.total_cmp(&best_score) {
                Ordering::Greater => true,
                Ordering::Equal => candidate.cost < remaining[best].cost,
                Ordering::Less => false,
            };
            if better {
                best = index;
                best_score = score;
            }
        }

        let candidate = remaining.remove(best);
        stats.feed(&candidate.outcome);
        total_score += best_score;
        total_cost += candidate.cost as u64;
        steps.push(PlanStep {
            candidate,
            score: best_score,
            stats,
        });
    }

    debug!(steps = steps.len(), sheen = stats.sheen, total_score, "Built feeding plan");
    FeedingPlanResult {
        steps,
        final_stats: stats,
        total_score,
        total_cost,
    }
}
