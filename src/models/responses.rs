use serde::{Deserialize, Serialize};

/// Result of a compatibility evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvaluation {
    pub is_match: bool,
    pub score: f64,
    pub max_score: f64,
}

impl MatchEvaluation {
    /// Result for a pair that failed a hard gate
    pub fn rejected(max_score: f64) -> Self {
        Self {
            is_match: false,
            score: 0.0,
            max_score,
        }
    }
}

/// Response for a pair evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub within_radius: bool,
    /// Meters between the two users, when both locations are known
    pub distance_meters: Option<f64>,
    pub radius_meters: f64,
    #[serde(flatten)]
    pub evaluation: MatchEvaluation,
}
