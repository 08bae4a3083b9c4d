use serde::{Deserialize, Serialize};

use crate::advisory::profile::{HeatingType, Tenure, UserProfile};

/// Cost class of an action. Drives the affordability exemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionCategory {
    LowCost,
    Medium,
    MajorInvestment,
}

impl ActionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ActionCategory::LowCost => "low-cost",
            ActionCategory::Medium => "medium",
            ActionCategory::MajorInvestment => "major-investment",
        }
    }

    /// Low-cost actions are suggested whatever the stated budget.
    pub const fn bypasses_budget(self) -> bool {
        matches!(self, ActionCategory::LowCost)
    }
}

/// Qualitative impact on 17:00-20:00 grid demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeakRelief {
    Low,
    Medium,
    High,
}

impl PeakRelief {
    /// Numeric contribution of the rating to the peak component.
    pub const fn value(self) -> f64 {
        match self {
            PeakRelief::Low => 0.25,
            PeakRelief::Medium => 0.60,
            PeakRelief::High => 1.00,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PeakRelief::Low => "low",
            PeakRelief::Medium => "medium",
            PeakRelief::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    Easy,
    Moderate,
    /// Needs an installer.
    Pro,
}

/// Closed `[low, high]` interval as stored in the catalog resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

impl From<[f64; 2]> for Interval {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<Interval> for [f64; 2] {
    fn from(value: Interval) -> Self {
        [value.low, value.high]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsidyCode {
    #[serde(rename = "ISDE")]
    Isde,
    Municipal,
    Warmtefonds,
}

/// Label pointing the household at a subsidy scheme; informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyHint {
    pub code: SubsidyCode,
    pub note: String,
}

/// A single profile predicate an action can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Heating(HeatingType),
}

impl Requirement {
    /// Profile field the predicate reads.
    pub const fn field(&self) -> &'static str {
        match self {
            Requirement::Heating(_) => "heating",
        }
    }

    /// Absent profile answers never satisfy a declared requirement.
    pub fn is_met_by(&self, profile: &UserProfile) -> bool {
        match self {
            Requirement::Heating(expected) => profile.heating == Some(*expected),
        }
    }
}

/// Partial-profile gate declared by an action (`requires` in the resource).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating: Option<HeatingType>,
}

impl ActionRequirements {
    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    pub fn predicates(&self) -> Vec<Requirement> {
        let mut predicates = Vec::new();
        if let Some(heating) = self.heating {
            predicates.push(Requirement::Heating(heating));
        }
        predicates
    }
}

/// Catalog entry describing one energy action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDefinition {
    pub id: String,
    pub category: ActionCategory,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub audience: Vec<Tenure>,
    #[serde(default, skip_serializing_if = "ActionRequirements::is_empty")]
    pub requires: ActionRequirements,
    #[serde(rename = "costRangeEUR")]
    pub cost_range_eur: Interval,
    #[serde(rename = "annualSavingsEUR")]
    pub annual_savings_eur: Interval,
    #[serde(rename = "annualCO2kg")]
    pub annual_co2_kg: Interval,
    pub peak_relief: PeakRelief,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feasibility: Option<Feasibility>,
    #[serde(default)]
    pub renter_friendly: bool,
    #[serde(default)]
    pub subsidies: Vec<SubsidyHint>,
    #[serde(default)]
    pub how_to: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl ActionDefinition {
    /// An empty audience places no restriction on tenure.
    pub fn admits_tenure(&self, tenure: Option<Tenure>) -> bool {
        if self.audience.is_empty() {
            return true;
        }
        tenure
            .map(|tenure| self.audience.contains(&tenure))
            .unwrap_or(false)
    }
}
