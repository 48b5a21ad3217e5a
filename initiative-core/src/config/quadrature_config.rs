use serde::{Deserialize, Serialize};

use super::defaults;

/// Slice counts for the numerical integrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Midpoint slices across a single unit's support.
    pub single_unit_slices: usize,
    /// Slices across the union support of both groups.
    pub group_slices: usize,
    /// Slices for the fastest-ally vs fastest-enemy matchup.
    pub pairwise_slices: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            single_unit_slices: defaults::DEFAULT_SINGLE_UNIT_SLICES,
            group_slices: defaults::DEFAULT_GROUP_SLICES,
            pairwise_slices: defaults::DEFAULT_PAIRWISE_SLICES,
        }
    }
}
