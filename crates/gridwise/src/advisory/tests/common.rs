use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::advisory::catalog::{
    ActionCatalog, ActionCategory, ActionDefinition, ActionRequirements, Feasibility, Interval,
    PeakRelief,
};
use crate::advisory::grid::GridConstrainedAreas;
use crate::advisory::profile::{HeatingType, Tenure, UserProfile};
use crate::advisory::scoring::ScoringEngine;
use crate::advisory::service::AdvisoryService;

pub(super) const CONSTRAINED_PC4: &str = "1102";
pub(super) const QUIET_PC4: &str = "7411";

pub(super) fn action(
    id: &str,
    category: ActionCategory,
    cost: [f64; 2],
    savings: [f64; 2],
    peak_relief: PeakRelief,
    renter_friendly: bool,
) -> ActionDefinition {
    ActionDefinition {
        id: id.to_string(),
        category,
        title: id.replace('-', " "),
        summary: String::new(),
        audience: Vec::new(),
        requires: ActionRequirements::default(),
        cost_range_eur: Interval::from(cost),
        annual_savings_eur: Interval::from(savings),
        annual_co2_kg: Interval::new(10.0, 20.0),
        peak_relief,
        feasibility: Some(Feasibility::Easy),
        renter_friendly,
        subsidies: Vec::new(),
        how_to: Vec::new(),
        evidence: Vec::new(),
    }
}

/// Low-cost, renter-friendly, high peak relief, cost [0, 20], savings [50, 50].
pub(super) fn pledge_action(id: &str) -> ActionDefinition {
    action(
        id,
        ActionCategory::LowCost,
        [0.0, 20.0],
        [50.0, 50.0],
        PeakRelief::High,
        true,
    )
}

pub(super) fn owner_only(mut action: ActionDefinition) -> ActionDefinition {
    action.audience = vec![Tenure::Owner, Tenure::Vve];
    action
}

pub(super) fn requires_gas_boiler(mut action: ActionDefinition) -> ActionDefinition {
    action.requires = ActionRequirements {
        heating: Some(HeatingType::GasBoiler),
    };
    action
}

pub(super) fn renter_profile(pc4: &str) -> UserProfile {
    UserProfile::new(pc4)
        .with_tenure(Tenure::Renter)
        .with_heating(HeatingType::GasBoiler)
        .with_investment_capacity(0.0)
}

pub(super) fn owner_profile(pc4: &str, budget: f64) -> UserProfile {
    UserProfile::new(pc4)
        .with_tenure(Tenure::Owner)
        .with_heating(HeatingType::GasBoiler)
        .with_investment_capacity(budget)
}

pub(super) fn grid_areas() -> GridConstrainedAreas {
    GridConstrainedAreas::new([CONSTRAINED_PC4, "3511"])
}

pub(super) fn catalog(actions: Vec<ActionDefinition>) -> ActionCatalog {
    ActionCatalog::new(actions).expect("fixture catalog is valid")
}

pub(super) fn engine(actions: Vec<ActionDefinition>) -> ScoringEngine {
    ScoringEngine::new(catalog(actions), grid_areas())
}

pub(super) fn standard_service() -> Arc<AdvisoryService> {
    let engine = ScoringEngine::new(
        ActionCatalog::standard().expect("bundled catalog"),
        GridConstrainedAreas::standard().expect("bundled grid list"),
    );
    Arc::new(AdvisoryService::new(Arc::new(engine)))
}

pub(super) fn ids(recommendations: &[crate::advisory::scoring::Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|rec| rec.action.id.as_str())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
