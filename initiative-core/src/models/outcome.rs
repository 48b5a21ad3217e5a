use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Probability;
use crate::config::OutcomeConfig;

/// Badge for a versus evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InitiativeOutcome {
    /// Allies always move first.
    Guaranteed,
    /// Allies never move first.
    Impossible,
    /// Depends on the variance roll.
    Contested,
}

impl InitiativeOutcome {
    /// Classify a group win probability against the configured thresholds.
    pub fn classify(probability: Probability, thresholds: &OutcomeConfig) -> Self {
        let p = probability.value();
        if p >= thresholds.guaranteed_threshold {
            Self::Guaranteed
        } else if p <= thresholds.impossible_threshold {
            Self::Impossible
        } else {
            Self::Contested
        }
    }

    pub fn is_decided(self) -> bool {
        !matches!(self, Self::Contested)
    }
}
