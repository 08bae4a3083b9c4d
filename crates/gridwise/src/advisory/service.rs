use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::ActionDefinition;
use super::grid::Pc4;
use super::plan::{PlanSummary, DEFAULT_TOP_PICKS};
use super::profile::UserProfile;
use super::scoring::{Recommendation, ScoreBreakdown, ScoringEngine};

/// Ranked recommendations plus the plan summary shown to the household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub pc4: Pc4,
    pub in_grid_constrained_area: bool,
    pub recommendations: Vec<Recommendation>,
    pub plan: PlanSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridAreaStatus {
    pub pc4: Pc4,
    pub well_formed: bool,
    pub grid_constrained: bool,
}

/// Facade over the scoring engine used by the HTTP router and the CLI.
pub struct AdvisoryService {
    engine: Arc<ScoringEngine>,
    top_picks: usize,
}

impl AdvisoryService {
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self {
            engine,
            top_picks: DEFAULT_TOP_PICKS,
        }
    }

    pub fn with_top_picks(mut self, top_picks: usize) -> Self {
        self.top_picks = top_picks;
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Rank the catalog for a submitted profile.
    pub fn recommend(&self, profile: &UserProfile) -> RecommendationResponse {
        if !profile.pc4.is_well_formed() {
            warn!(pc4 = %profile.pc4, "scoring profile with malformed PC4");
        }

        let in_grid_constrained_area = self.engine.is_grid_constrained(&profile.pc4);
        let recommendations = self.engine.recommend(profile);
        let plan =
            PlanSummary::from_ranked(&recommendations, self.top_picks, in_grid_constrained_area);

        info!(
            pc4 = %profile.pc4,
            grid_constrained = in_grid_constrained_area,
            recommended = recommendations.len(),
            "recommendations computed"
        );

        RecommendationResponse {
            pc4: profile.pc4.clone(),
            in_grid_constrained_area,
            recommendations,
            plan,
        }
    }

    /// Score components for one action, for "why this recommendation" views.
    pub fn explain(
        &self,
        profile: &UserProfile,
        action_id: &str,
    ) -> Result<ScoreBreakdown, AdvisoryServiceError> {
        self.engine
            .explain(profile, action_id)
            .ok_or_else(|| AdvisoryServiceError::UnknownAction(action_id.to_string()))
    }

    pub fn actions(&self) -> &[ActionDefinition] {
        self.engine.catalog().actions()
    }

    pub fn grid_status(&self, pc4: Pc4) -> GridAreaStatus {
        GridAreaStatus {
            well_formed: pc4.is_well_formed(),
            grid_constrained: self.engine.is_grid_constrained(&pc4),
            pc4,
        }
    }
}

/// Error raised by the advisory service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryServiceError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),
}
