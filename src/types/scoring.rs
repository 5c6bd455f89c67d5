use serde::{Deserialize, Serialize};

/// Transparency index for one source. Every field lies in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    pub score: f64,
    pub completeness_score: f64,
    pub easiness_score: f64,
}

impl Score {
    pub fn new(score: f64, completeness_score: f64, easiness_score: f64) -> Self {
        Self {
            score,
            completeness_score,
            easiness_score,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}
