//! Recommendation scoring: eligibility, affordability, weighted scoring and ranking.

mod eligibility;
mod grade;
mod weights;

pub use eligibility::{
    is_affordable, EligibilityFilter, EligibilityGate, RequirementsGate, TenureGate,
};
pub use grade::Grade;
pub use weights::ScoreWeights;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{ActionCatalog, ActionDefinition};
use super::grid::{GridConstrainedAreas, Pc4};
use super::profile::UserProfile;

const CHEAP_ACTION_CEILING_EUR: f64 = 100.0;
const RENTER_FRIENDLY_EQUITY: f64 = 0.7;
const DEFAULT_EQUITY: f64 = 0.3;
const CHEAP_ACTION_EQUITY_BONUS: f64 = 0.3;

/// Catalog-wide range of annual savings used for min-max normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsBounds {
    pub min: f64,
    pub max: f64,
}

impl SavingsBounds {
    /// Lowest `low` and highest `high` across all actions; `None` for an empty slice.
    pub fn from_actions(actions: &[ActionDefinition]) -> Option<Self> {
        let mut iter = actions.iter();
        let first = iter.next()?;
        let seed = Self {
            min: first.annual_savings_eur.low,
            max: first.annual_savings_eur.high,
        };
        Some(iter.fold(seed, |bounds, action| Self {
            min: bounds.min.min(action.annual_savings_eur.low),
            max: bounds.max.max(action.annual_savings_eur.high),
        }))
    }

    /// Maps `value` into [0, 1]; a degenerate range yields exactly 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 0.5;
        }
        (value - self.min) / (self.max - self.min)
    }
}

/// Inputs shared by every action scored within one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    pub bounds: SavingsBounds,
    pub in_grid_constrained_area: bool,
    pub weights: ScoreWeights,
}

impl ScoringContext {
    pub fn new(bounds: SavingsBounds, in_grid_constrained_area: bool) -> Self {
        Self {
            bounds,
            in_grid_constrained_area,
            weights: ScoreWeights::for_area(in_grid_constrained_area),
        }
    }
}

/// Component values and weights behind one action's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub action_id: String,
    pub peak: f64,
    pub energy: f64,
    pub equity: f64,
    pub weights: ScoreWeights,
    pub raw_score: f64,
    pub score: u8,
    pub grade: Grade,
}

impl ScoreBreakdown {
    pub fn peak_contribution(&self) -> f64 {
        self.weights.peak * self.peak
    }

    pub fn energy_contribution(&self) -> f64 {
        self.weights.energy * self.energy
    }

    pub fn equity_contribution(&self) -> f64 {
        self.weights.equity * self.equity
    }
}

/// A catalog action graded for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub action: ActionDefinition,
    pub score: u8,
    pub grade: Grade,
}

/// Scores a single action against pre-computed context.
pub fn score_action(action: &ActionDefinition, context: &ScoringContext) -> ScoreBreakdown {
    let peak = action.peak_relief.value();
    let energy = context
        .bounds
        .normalize(action.annual_savings_eur.midpoint());
    let equity = equity_value(action);
    let weights = context.weights;

    let raw_score =
        100.0 * (weights.peak * peak + weights.energy * energy + weights.equity * equity);
    let score = raw_score.round().clamp(0.0, 100.0) as u8;

    ScoreBreakdown {
        action_id: action.id.clone(),
        peak,
        energy,
        equity,
        weights,
        raw_score,
        score,
        grade: Grade::from_score(score),
    }
}

fn equity_value(action: &ActionDefinition) -> f64 {
    let base = if action.renter_friendly {
        RENTER_FRIENDLY_EQUITY
    } else {
        DEFAULT_EQUITY
    };
    let bonus = if action.cost_range_eur.midpoint() <= CHEAP_ACTION_CEILING_EUR {
        CHEAP_ACTION_EQUITY_BONUS
    } else {
        0.0
    };
    (base + bonus).clamp(0.0, 1.0)
}

/// Ranks `actions` for `profile` with the standard eligibility gates.
///
/// Normalization bounds come from the whole slice, not only the actions that
/// survive filtering. Equal scores keep their catalog order.
pub fn score_actions(
    profile: &UserProfile,
    actions: &[ActionDefinition],
    grid_areas: &GridConstrainedAreas,
) -> Vec<Recommendation> {
    rank(profile, actions, grid_areas, &EligibilityFilter::standard())
}

fn rank(
    profile: &UserProfile,
    actions: &[ActionDefinition],
    grid_areas: &GridConstrainedAreas,
    eligibility: &EligibilityFilter,
) -> Vec<Recommendation> {
    let Some(bounds) = SavingsBounds::from_actions(actions) else {
        return Vec::new();
    };
    let context = ScoringContext::new(bounds, grid_areas.contains(&profile.pc4));

    let eligible: Vec<&ActionDefinition> = actions
        .iter()
        .filter(|action| eligibility.is_eligible(action, profile))
        .collect();
    let eligible_count = eligible.len();

    let mut recommendations: Vec<Recommendation> = eligible
        .into_iter()
        .filter(|action| is_affordable(action, profile))
        .map(|action| {
            let breakdown = score_action(action, &context);
            Recommendation {
                action: action.clone(),
                score: breakdown.score,
                grade: breakdown.grade,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        pc4 = %profile.pc4,
        grid_constrained = context.in_grid_constrained_area,
        catalog = actions.len(),
        eligible = eligible_count,
        recommended = recommendations.len(),
        "ranked actions"
    );

    recommendations
}

/// Long-lived engine bound to a catalog and grid reference list.
///
/// Holds no mutable state; share it behind an `Arc` across threads.
#[derive(Debug)]
pub struct ScoringEngine {
    catalog: Arc<ActionCatalog>,
    grid_areas: Arc<GridConstrainedAreas>,
    eligibility: EligibilityFilter,
}

impl ScoringEngine {
    pub fn new(catalog: ActionCatalog, grid_areas: GridConstrainedAreas) -> Self {
        Self::from_shared(Arc::new(catalog), Arc::new(grid_areas))
    }

    pub fn from_shared(catalog: Arc<ActionCatalog>, grid_areas: Arc<GridConstrainedAreas>) -> Self {
        Self {
            catalog,
            grid_areas,
            eligibility: EligibilityFilter::standard(),
        }
    }

    /// Adds a gate on top of the standard tenure and `requires` checks.
    pub fn with_gate<G>(mut self, gate: G) -> Self
    where
        G: EligibilityGate + 'static,
    {
        self.eligibility = self.eligibility.with_gate(gate);
        self
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    pub fn grid_areas(&self) -> &GridConstrainedAreas {
        &self.grid_areas
    }

    pub fn is_grid_constrained(&self, pc4: &Pc4) -> bool {
        self.grid_areas.contains(pc4)
    }

    pub fn recommend(&self, profile: &UserProfile) -> Vec<Recommendation> {
        rank(
            profile,
            self.catalog.actions(),
            &self.grid_areas,
            &self.eligibility,
        )
    }

    /// Score components for one catalog action, regardless of eligibility.
    pub fn explain(&self, profile: &UserProfile, action_id: &str) -> Option<ScoreBreakdown> {
        let action = self.catalog.get(action_id)?;
        let bounds = SavingsBounds::from_actions(self.catalog.actions())?;
        let context = ScoringContext::new(bounds, self.is_grid_constrained(&profile.pc4));
        Some(score_action(action, &context))
    }
}
