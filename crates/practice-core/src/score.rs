//! Qualitative bands for student practice scores (0-100).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    VeryGood,
    Good,
    Average,
    Poor,
}

impl ScoreBand {
    /// `>= 95` very good, `>= 80` good, `>= 60` average, else poor.
    pub fn from_score(score: f64) -> Self {
        if score >= 95.0 {
            ScoreBand::VeryGood
        } else if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Average
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::VeryGood => "Very Good",
            ScoreBand::Good => "Good",
            ScoreBand::Average => "Average",
            ScoreBand::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Clamp a score to the 0-100 range used by progress bars.
pub fn clamp_percent(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}
