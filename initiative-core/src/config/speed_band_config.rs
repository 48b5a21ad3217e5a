use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-turn speed variance band, as multipliers of the nominal speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedBandConfig {
    pub lower_factor: f64,
    pub upper_factor: f64,
}

impl Default for SpeedBandConfig {
    fn default() -> Self {
        Self {
            lower_factor: defaults::DEFAULT_LOWER_FACTOR,
            upper_factor: defaults::DEFAULT_UPPER_FACTOR,
        }
    }
}
