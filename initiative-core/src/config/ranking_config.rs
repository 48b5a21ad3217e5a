use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking and outcome-badge tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Probabilities closer than this compare as equal.
    pub tie_tolerance: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            tie_tolerance: defaults::DEFAULT_TIE_TOLERANCE,
        }
    }
}

/// Thresholds that turn a group win probability into a badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeConfig {
    /// At or above this the allies are certain to move first.
    pub guaranteed_threshold: f64,
    /// At or below this the allies cannot move first.
    pub impossible_threshold: f64,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            guaranteed_threshold: defaults::DEFAULT_GUARANTEED_THRESHOLD,
            impossible_threshold: defaults::DEFAULT_IMPOSSIBLE_THRESHOLD,
        }
    }
}
