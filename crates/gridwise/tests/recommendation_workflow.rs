//! End-to-end scenarios for ranking the bundled catalog through the public API.

use std::collections::HashSet;

use gridwise::advisory::catalog::{ActionCatalog, ActionCategory};
use gridwise::advisory::grid::{GridConstrainedAreas, Pc4};
use gridwise::advisory::profile::{HeatingType, Tenure, UserProfile};
use gridwise::advisory::scoring::{Grade, ScoringEngine};
use gridwise::advisory::{score_actions, AdvisoryService};
use std::sync::Arc;

fn standard_engine() -> ScoringEngine {
    ScoringEngine::new(
        ActionCatalog::standard().expect("bundled catalog"),
        GridConstrainedAreas::standard().expect("bundled grid list"),
    )
}

#[test]
fn single_action_catalog_matches_worked_example() {
    let raw = r#"[{
        "id": "evening-peak-pledge",
        "category": "low-cost",
        "audience": [],
        "requires": {},
        "costRangeEUR": [0, 20],
        "annualSavingsEUR": [50, 50],
        "annualCO2kg": [20, 40],
        "peakRelief": "high",
        "renterFriendly": true
    }]"#;
    let catalog = ActionCatalog::from_reader(raw.as_bytes()).expect("catalog parses");
    let profile = UserProfile::new("7411")
        .with_tenure(Tenure::Renter)
        .with_heating(HeatingType::GasBoiler)
        .with_investment_capacity(0.0);

    let recommendations = score_actions(
        &profile,
        catalog.actions(),
        &GridConstrainedAreas::standard().expect("grid list"),
    );

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].score, 85);
    assert_eq!(recommendations[0].grade, Grade::A);
}

#[test]
fn renter_without_budget_only_sees_low_cost_unrestricted_actions() {
    let engine = standard_engine();
    let profile = UserProfile::new("1102")
        .with_tenure(Tenure::Renter)
        .with_heating(HeatingType::GasBoiler);

    let recommendations = engine.recommend(&profile);

    assert!(!recommendations.is_empty());
    for rec in &recommendations {
        assert_eq!(rec.action.category, ActionCategory::LowCost);
        assert!(rec.action.audience.is_empty() || rec.action.audience.contains(&Tenure::Renter));
    }
}

#[test]
fn owner_with_budget_unlocks_gated_investments() {
    let engine = standard_engine();
    let profile = UserProfile::new("7411")
        .with_tenure(Tenure::Owner)
        .with_heating(HeatingType::GasBoiler)
        .with_investment_capacity(10_000.0);

    let ids: HashSet<String> = engine
        .recommend(&profile)
        .into_iter()
        .map(|rec| rec.action.id)
        .collect();

    assert!(ids.contains("hybrid-heat-pump"));
    assert!(ids.contains("hydronic-balancing"));
    assert!(ids.contains("solar-panels"));
    assert_eq!(ids.len(), engine.catalog().len());
}

#[test]
fn district_heating_excludes_boiler_specific_actions() {
    let engine = standard_engine();
    let profile = UserProfile::new("7411")
        .with_tenure(Tenure::Owner)
        .with_heating(HeatingType::District)
        .with_investment_capacity(10_000.0);

    let recommendations = engine.recommend(&profile);

    assert!(recommendations
        .iter()
        .all(|rec| rec.action.requires.heating.is_none()));
}

#[test]
fn service_attaches_plan_summary() {
    let service = AdvisoryService::new(Arc::new(standard_engine())).with_top_picks(2);
    let profile = UserProfile::new("3511")
        .with_tenure(Tenure::Vve)
        .with_heating(HeatingType::GasBoiler)
        .with_investment_capacity(1_500.0);

    let response = service.recommend(&profile);

    assert!(response.in_grid_constrained_area);
    assert!(response.plan.in_grid_constrained_area);
    assert_eq!(response.plan.top_action_ids.len(), 2);
    assert_eq!(
        response.plan.top_action_ids[0],
        response.recommendations[0].action.id
    );
    assert_eq!(response.plan.recommended_count, response.recommendations.len());
}

#[test]
fn recommendation_json_flattens_action_fields() {
    let engine = standard_engine();
    let profile = UserProfile::new("7411").with_tenure(Tenure::Renter);

    let recommendations = engine.recommend(&profile);
    let value = serde_json::to_value(&recommendations[0]).expect("serializes");

    assert!(value["id"].is_string());
    assert!(value["annualSavingsEUR"].is_array());
    assert!(value["peakRelief"].is_string());
    assert!(value["score"].is_u64());
    assert!(["A", "B", "C", "D"].contains(&value["grade"].as_str().expect("grade")));
}

#[test]
fn grid_lookup_uses_reference_list() {
    let engine = standard_engine();

    assert!(engine.is_grid_constrained(&Pc4::new("1102")));
    assert!(!engine.is_grid_constrained(&Pc4::new("7411")));
}
