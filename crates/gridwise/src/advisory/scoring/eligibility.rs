use std::fmt;

use crate::advisory::catalog::ActionDefinition;
use crate::advisory::profile::UserProfile;

/// One yes/no rule deciding whether an action is surfaced for a profile.
///
/// Gates must be pure: no side effects, same answer for the same inputs.
pub trait EligibilityGate: Send + Sync {
    fn name(&self) -> &'static str;
    fn admits(&self, action: &ActionDefinition, profile: &UserProfile) -> bool;
}

/// Rejects actions whose declared audience excludes the profile's tenure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TenureGate;

impl EligibilityGate for TenureGate {
    fn name(&self) -> &'static str {
        "tenure"
    }

    fn admits(&self, action: &ActionDefinition, profile: &UserProfile) -> bool {
        action.admits_tenure(profile.tenure)
    }
}

/// Evaluates every predicate in the action's `requires` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementsGate;

impl EligibilityGate for RequirementsGate {
    fn name(&self) -> &'static str {
        "requires"
    }

    fn admits(&self, action: &ActionDefinition, profile: &UserProfile) -> bool {
        action
            .requires
            .predicates()
            .iter()
            .all(|requirement| requirement.is_met_by(profile))
    }
}

/// Ordered set of gates; an action is eligible when every gate admits it.
pub struct EligibilityFilter {
    gates: Vec<Box<dyn EligibilityGate>>,
}

impl EligibilityFilter {
    /// Tenure and `requires` gates.
    pub fn standard() -> Self {
        Self {
            gates: vec![Box::new(TenureGate), Box::new(RequirementsGate)],
        }
    }

    pub fn with_gate<G>(mut self, gate: G) -> Self
    where
        G: EligibilityGate + 'static,
    {
        self.gates.push(Box::new(gate));
        self
    }

    pub fn is_eligible(&self, action: &ActionDefinition, profile: &UserProfile) -> bool {
        self.first_rejection(action, profile).is_none()
    }

    /// Name of the first gate that rejects the action, if any.
    pub fn first_rejection(
        &self,
        action: &ActionDefinition,
        profile: &UserProfile,
    ) -> Option<&'static str> {
        self.gates
            .iter()
            .find(|gate| !gate.admits(action, profile))
            .map(|gate| gate.name())
    }

    pub fn gate_names(&self) -> Vec<&'static str> {
        self.gates.iter().map(|gate| gate.name()).collect()
    }
}

impl Default for EligibilityFilter {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for EligibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EligibilityFilter")
            .field("gates", &self.gate_names())
            .finish()
    }
}

/// Low-cost actions always pass; everything else must fit the lower cost bound
/// within the stated budget.
pub fn is_affordable(action: &ActionDefinition, profile: &UserProfile) -> bool {
    action.category.bypasses_budget() || action.cost_range_eur.low <= profile.investment_capacity()
}
