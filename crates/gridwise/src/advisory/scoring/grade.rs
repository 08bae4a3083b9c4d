use serde::{Deserialize, Serialize};

/// Letter bucket for an integer score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// `(lower bound, grade)` pairs, highest band first.
    pub const THRESHOLDS: [(u8, Grade); 3] = [(80, Grade::A), (65, Grade::B), (50, Grade::C)];

    pub fn from_score(score: u8) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(lower, _)| score >= *lower)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::D)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}
