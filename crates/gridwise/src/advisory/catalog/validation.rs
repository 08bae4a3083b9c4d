use std::collections::HashSet;

use super::domain::{ActionDefinition, Interval};
use super::CatalogError;

/// Fault found in one interval of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDefect {
    NotFinite,
    Negative,
    Inverted,
}

impl RangeDefect {
    pub const fn describe(self) -> &'static str {
        match self {
            RangeDefect::NotFinite => "bounds must be finite numbers",
            RangeDefect::Negative => "bounds must not be negative",
            RangeDefect::Inverted => "low bound exceeds high bound",
        }
    }
}

pub(crate) fn validate_actions(actions: &[ActionDefinition]) -> Result<(), CatalogError> {
    if actions.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::with_capacity(actions.len());
    for (index, action) in actions.iter().enumerate() {
        let id = action.id.trim();
        if id.is_empty() {
            return Err(CatalogError::MissingId { index });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }

        check_range(id, "costRangeEUR", &action.cost_range_eur)?;
        check_range(id, "annualSavingsEUR", &action.annual_savings_eur)?;
        check_range(id, "annualCO2kg", &action.annual_co2_kg)?;
    }

    Ok(())
}

fn check_range(id: &str, field: &'static str, range: &Interval) -> Result<(), CatalogError> {
    let defect = if !range.low.is_finite() || !range.high.is_finite() {
        Some(RangeDefect::NotFinite)
    } else if range.low < 0.0 || range.high < 0.0 {
        Some(RangeDefect::Negative)
    } else if range.low > range.high {
        Some(RangeDefect::Inverted)
    } else {
        None
    };

    match defect {
        Some(defect) => Err(CatalogError::InvalidRange {
            id: id.to_string(),
            field,
            low: range.low,
            high: range.high,
            defect,
        }),
        None => Ok(()),
    }
}
