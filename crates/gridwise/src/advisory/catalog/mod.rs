//! Static action catalog: definitions, resource loading and load-time validation.
//!
//! A catalog is validated once when it is built and never mutated afterwards, so the
//! scoring pipeline can assume well-formed, non-empty intervals.

mod domain;
mod validation;

pub use domain::{
    ActionCategory, ActionDefinition, ActionRequirements, Feasibility, Interval, PeakRelief,
    Requirement, SubsidyCode, SubsidyHint,
};
pub use validation::RangeDefect;

use std::io::Read;
use std::path::Path;

use tracing::debug;

const STANDARD_CATALOG: &str = include_str!("../../../data/actions.json");

/// Validated, read-only collection of action definitions.
#[derive(Debug, Clone)]
pub struct ActionCatalog {
    actions: Vec<ActionDefinition>,
}

impl ActionCatalog {
    pub fn new(actions: Vec<ActionDefinition>) -> Result<Self, CatalogError> {
        validation::validate_actions(&actions)?;
        Ok(Self { actions })
    }

    /// Catalog bundled with the crate.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_reader(STANDARD_CATALOG.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        debug!(path = %path.display(), actions = catalog.len(), "loaded action catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let actions: Vec<ActionDefinition> = serde_json::from_reader(reader)?;
        Self::new(actions)
    }

    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }

    pub fn get(&self, id: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|action| action.id == id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionDefinition> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionCatalog {
    type Item = &'a ActionDefinition;
    type IntoIter = std::slice::Iter<'a, ActionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Configuration error raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog must contain at least one action")]
    Empty,
    #[error("catalog entry #{index} has an empty id")]
    MissingId { index: usize },
    #[error("catalog contains duplicate action id '{0}'")]
    DuplicateId(String),
    #[error("action '{id}' has invalid {field} [{low}, {high}]: {}", .defect.describe())]
    InvalidRange {
        id: String,
        field: &'static str,
        low: f64,
        high: f64,
        defect: RangeDefect,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, savings: [f64; 2]) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "category": "medium",
                "costRangeEUR": [100, 200],
                "annualSavingsEUR": [{}, {}],
                "annualCO2kg": [10, 20],
                "peakRelief": "medium"
            }}"#,
            savings[0], savings[1]
        )
    }

    #[test]
    fn standard_catalog_loads_and_validates() {
        let catalog = ActionCatalog::standard().expect("bundled catalog is valid");

        assert!(catalog.len() >= 10);
        assert!(catalog
            .iter()
            .any(|action| action.category == ActionCategory::LowCost));
        assert!(catalog
            .iter()
            .any(|action| !action.requires.is_empty()));
        assert!(catalog.get("smart-thermostat-peak").is_some());
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = ActionCatalog::from_reader("[]".as_bytes()).expect_err("empty catalog fails");
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn rejects_inverted_savings_range() {
        let raw = format!("[{}]", entry("led-bulbs", [80.0, 40.0]));

        let err = ActionCatalog::from_reader(raw.as_bytes()).expect_err("inverted range fails");

        match err {
            CatalogError::InvalidRange {
                id, field, defect, ..
            } => {
                assert_eq!(id, "led-bulbs");
                assert_eq!(field, "annualSavingsEUR");
                assert_eq!(defect, RangeDefect::Inverted);
            }
            other => panic!("expected invalid range, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_bounds() {
        let raw = format!("[{}]", entry("radiator-foil", [-5.0, 10.0]));

        let err = ActionCatalog::from_reader(raw.as_bytes()).expect_err("negative bound fails");

        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = format!(
            "[{}, {}]",
            entry("draft-strips", [10.0, 20.0]),
            entry("draft-strips", [30.0, 40.0])
        );

        let err = ActionCatalog::from_reader(raw.as_bytes()).expect_err("duplicate id fails");

        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "draft-strips"));
    }

    #[test]
    fn rejects_blank_ids() {
        let raw = format!("[{}]", entry("  ", [10.0, 20.0]));

        let err = ActionCatalog::from_reader(raw.as_bytes()).expect_err("blank id fails");

        assert!(matches!(err, CatalogError::MissingId { index: 0 }));
    }

    #[test]
    fn reports_missing_file_path() {
        let err = ActionCatalog::from_path("/nonexistent/gridwise/actions.json")
            .expect_err("missing file fails");

        assert!(err.to_string().contains("/nonexistent/gridwise/actions.json"));
    }
}
