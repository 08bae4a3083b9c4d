use serde::{Deserialize, Serialize};

const GRID_PEAK_BOOST: f64 = 1.3;
const GRID_PEAK_CAP: f64 = 0.65;

/// Relative importance of the peak, energy and equity components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub peak: f64,
    pub energy: f64,
    pub equity: f64,
}

impl ScoreWeights {
    pub const BASE: ScoreWeights = ScoreWeights {
        peak: 0.5,
        energy: 0.3,
        equity: 0.2,
    };

    pub fn for_area(grid_constrained: bool) -> Self {
        if grid_constrained {
            Self::BASE.grid_constrained()
        } else {
            Self::BASE
        }
    }

    /// Shift mass toward peak relief: boost the peak weight (capped) and
    /// renormalize so the energy/equity ratio is preserved.
    pub fn grid_constrained(self) -> Self {
        let boosted = Self {
            peak: (self.peak * GRID_PEAK_BOOST).min(GRID_PEAK_CAP),
            ..self
        };
        boosted.normalized()
    }

    pub fn sum(&self) -> f64 {
        self.peak + self.energy + self.equity
    }

    fn normalized(self) -> Self {
        let total = self.sum();
        if total <= 0.0 {
            return self;
        }
        Self {
            peak: self.peak / total,
            energy: self.energy / total,
            equity: self.equity / total,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::BASE
    }
}
