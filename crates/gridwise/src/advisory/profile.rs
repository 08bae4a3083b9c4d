use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::grid::Pc4;

/// Housing tenure used by the audience gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tenure {
    Renter,
    Owner,
    /// Owner-occupier inside a homeowners' association (Vereniging van Eigenaren).
    Vve,
}

impl Tenure {
    pub const fn label(self) -> &'static str {
        match self {
            Tenure::Renter => "renter",
            Tenure::Owner => "owner",
            Tenure::Vve => "vve",
        }
    }
}

/// Primary space-heating system reported in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingType {
    District,
    GasBoiler,
    Electric,
    HybridHeatPump,
    Unknown,
}

impl HeatingType {
    pub const fn label(self) -> &'static str {
        match self {
            HeatingType::District => "district",
            HeatingType::GasBoiler => "gas-boiler",
            HeatingType::Electric => "electric",
            HeatingType::HybridHeatPump => "hybrid-heat-pump",
            HeatingType::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomeType {
    Apartment,
    Row,
    Detached,
    SemiDetached,
    Maisonette,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuildYearBand {
    #[serde(rename = "pre-1992")]
    Pre1992,
    #[serde(rename = "1992-2005")]
    From1992To2005,
    #[serde(rename = "post-2005")]
    Post2005,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonthlyBillBand {
    #[serde(rename = "under-100")]
    Under100,
    #[serde(rename = "100-200")]
    From100To200,
    #[serde(rename = "200-300")]
    From200To300,
    #[serde(rename = "300-plus")]
    Over300,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

/// Headline motivation chosen by the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComfortPriority {
    SaveMoney,
    WarmerHome,
    ClimateImpact,
}

/// Basic behavioral hooks collected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habits {
    pub laundry_per_week: u8,
    pub dishwasher: bool,
    pub night_setback: bool,
}

impl Default for Habits {
    fn default() -> Self {
        Self {
            laundry_per_week: 3,
            dishwasher: false,
            night_setback: false,
        }
    }
}

/// Questionnaire answers for one onboarding session.
///
/// Only `pc4`, `tenure`, `heating` and `investment_capacity_eur` influence
/// ranking. The remaining answers are carried for consumers of the plan.
/// `comfort_priority` and `priority_ratings` are accepted but not weighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub pc4: Pc4,
    #[serde(default)]
    pub tenure: Option<Tenure>,
    #[serde(default)]
    pub heating: Option<HeatingType>,
    #[serde(
        default,
        rename = "investmentCapacityEUR",
        skip_serializing_if = "Option::is_none"
    )]
    pub investment_capacity_eur: Option<f64>,
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub home_type: HomeType,
    #[serde(default)]
    pub build_year_band: BuildYearBand,
    #[serde(default)]
    pub monthly_bill_band: MonthlyBillBand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfort_priority: Option<ComfortPriority>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub priority_ratings: BTreeMap<String, u8>,
    #[serde(default)]
    pub habits: Habits,
}

impl UserProfile {
    /// Minimal profile with every optional answer left blank.
    pub fn new(pc4: impl Into<String>) -> Self {
        Self {
            pc4: Pc4::new(pc4),
            tenure: None,
            heating: None,
            investment_capacity_eur: None,
            lang: Language::default(),
            home_type: HomeType::default(),
            build_year_band: BuildYearBand::default(),
            monthly_bill_band: MonthlyBillBand::default(),
            comfort_priority: None,
            priority_ratings: BTreeMap::new(),
            habits: Habits::default(),
        }
    }

    pub fn with_tenure(mut self, tenure: Tenure) -> Self {
        self.tenure = Some(tenure);
        self
    }

    pub fn with_heating(mut self, heating: HeatingType) -> Self {
        self.heating = Some(heating);
        self
    }

    pub fn with_investment_capacity(mut self, eur: f64) -> Self {
        self.investment_capacity_eur = Some(eur);
        self
    }

    /// Budget ceiling used for affordability; an unanswered budget counts as zero.
    pub fn investment_capacity(&self) -> f64 {
        self.investment_capacity_eur.unwrap_or(0.0).max(0.0)
    }
}
