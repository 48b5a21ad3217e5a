//! One unit against one opponent.
//!
//! Decided without integration when the two supports do not overlap;
//! otherwise the single-unit quadrature with the pairwise slice count.

use initiative_core::config::defaults::DEFAULT_PAIRWISE_SLICES;
use initiative_core::Probability;

use crate::distribution::{SpeedBand, SpeedDistribution};

use super::single_unit;

/// Probability a unit with `speed` acts before one with `opponent_speed`.
pub fn head_to_head_probability(speed: u32, opponent_speed: u32) -> Probability {
    let band = SpeedBand::default();
    estimate(
        &band.distribution(speed),
        &band.distribution(opponent_speed),
        DEFAULT_PAIRWISE_SLICES,
    )
}

pub fn estimate(
    unit: &SpeedDistribution,
    opponent: &SpeedDistribution,
    slices: usize,
) -> Probability {
    // Checked first so two identical points count as a tie, not a win.
    if unit.upper() <= opponent.lower() {
        return Probability::ZERO;
    }
    if unit.lower() >= opponent.upper() {
        return Probability::ONE;
    }
    single_unit::estimate(unit, std::slice::from_ref(opponent), slices)
}
