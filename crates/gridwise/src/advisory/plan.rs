use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scoring::{Grade, Recommendation};

pub const DEFAULT_TOP_PICKS: usize = 3;

/// Condensed view of a ranked list for plan and coach screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub in_grid_constrained_area: bool,
    pub top_action_ids: Vec<String>,
    pub recommended_count: usize,
    /// Mean annual savings summed over the top picks.
    #[serde(rename = "topAnnualSavingsEUR")]
    pub top_annual_savings_eur: f64,
    #[serde(rename = "topMonthlySavingsEUR")]
    pub top_monthly_savings_eur: f64,
    #[serde(rename = "topAnnualCO2kg")]
    pub top_annual_co2_kg: f64,
    pub grade_counts: BTreeMap<Grade, usize>,
}

impl PlanSummary {
    pub fn from_ranked(
        recommendations: &[Recommendation],
        top_n: usize,
        in_grid_constrained_area: bool,
    ) -> Self {
        let top = &recommendations[..top_n.min(recommendations.len())];

        let top_annual_savings_eur: f64 = top
            .iter()
            .map(|rec| rec.action.annual_savings_eur.midpoint())
            .sum();
        let top_annual_co2_kg = top
            .iter()
            .map(|rec| rec.action.annual_co2_kg.midpoint())
            .sum();

        let mut grade_counts = BTreeMap::new();
        for rec in recommendations {
            *grade_counts.entry(rec.grade).or_insert(0) += 1;
        }

        Self {
            in_grid_constrained_area,
            top_action_ids: top.iter().map(|rec| rec.action.id.clone()).collect(),
            recommended_count: recommendations.len(),
            top_annual_savings_eur,
            top_monthly_savings_eur: top_annual_savings_eur / 12.0,
            top_annual_co2_kg,
            grade_counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommended_count == 0
    }
}
