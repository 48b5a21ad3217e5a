use serde::{Deserialize, Serialize};

use super::defaults;

/// Roster intake configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Groups larger than this are still evaluated but logged.
    pub max_units_per_group: usize,
    /// Name given to rows submitted without one.
    pub default_unit_name: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_units_per_group: defaults::DEFAULT_MAX_UNITS_PER_GROUP,
            default_unit_name: defaults::DEFAULT_UNIT_NAME.to_string(),
        }
    }
}
