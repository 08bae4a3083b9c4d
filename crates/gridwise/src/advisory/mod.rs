//! Household energy-transition advisory: action catalog, grid reference data,
//! profile model and the recommendation scoring engine.

pub mod catalog;
pub mod grid;
pub mod plan;
pub mod profile;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{ActionCatalog, ActionDefinition, CatalogError};
pub use grid::{GridAreaError, GridConstrainedAreas, Pc4};
pub use plan::PlanSummary;
pub use profile::{HeatingType, Tenure, UserProfile};
pub use router::advisory_router;
pub use scoring::{score_actions, Grade, Recommendation, ScoreBreakdown, ScoringEngine};
pub use service::{AdvisoryService, AdvisoryServiceError, RecommendationResponse};
