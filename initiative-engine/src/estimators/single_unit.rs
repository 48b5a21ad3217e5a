//! Probability that one unit draws the highest speed among its competitors.
//!
//! ```text
//! P(target is max) = ∫ f_target(x) · Π_j F_j(x) dx
//!                  ≈ (1/N) Σ_i Π_j F_j(a + (i + ½)·Δ),   Δ = (b − a)/N
//! ```
//!
//! where `[a, b]` is the target's support and `F_j` the competitors' CDFs.

use initiative_core::config::defaults::DEFAULT_SINGLE_UNIT_SLICES;
use initiative_core::Probability;

use crate::distribution::{joint_probability_below, SpeedBand, SpeedDistribution};

/// Advantage of a unit with `target_speed` over `others_speeds`, using the
/// default band and slice count.
///
/// An uncontested unit always wins: no competitors yields exactly 1.0.
pub fn advantage_probability(target_speed: u32, others_speeds: &[u32]) -> Probability {
    let band = SpeedBand::default();
    estimate(
        &band.distribution(target_speed),
        &band.distributions(others_speeds),
        DEFAULT_SINGLE_UNIT_SLICES,
    )
}

/// Midpoint quadrature of the target's density times the competitors'
/// joint CDF over `slices` equal slices of the target's support.
///
/// A zero-width target collapses every midpoint onto its single point.
pub fn estimate(
    target: &SpeedDistribution,
    others: &[SpeedDistribution],
    slices: usize,
) -> Probability {
    if others.is_empty() {
        return Probability::ONE;
    }
    let slices = slices.max(1);
    let dx = target.width() / slices as f64;

    let total: f64 = (0..slices)
        .map(|i| {
            let x = target.lower() + dx * (i as f64 + 0.5);
            joint_probability_below(others, x)
        })
        .sum();

    Probability::new(total / slices as f64)
}
