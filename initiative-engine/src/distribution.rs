//! Uniform speed distributions and their tail probability.
//!
//! ```text
//! lower = nominal × lower_factor        (0.9 by default)
//! upper = nominal × upper_factor        (1.1 by default)
//!
//! P(draw < x) = 0                        x ≤ lower
//!             = 1                        x ≥ upper
//!             = (x − lower) / (upper − lower)   otherwise
//! ```

use initiative_core::config::{defaults, SpeedBandConfig};

/// Multipliers that turn a nominal speed into its per-turn support.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBand {
    lower_factor: f64,
    upper_factor: f64,
}

impl SpeedBand {
    pub fn new(lower_factor: f64, upper_factor: f64) -> Self {
        Self {
            lower_factor,
            upper_factor,
        }
    }

    pub fn lower_factor(&self) -> f64 {
        self.lower_factor
    }

    pub fn upper_factor(&self) -> f64 {
        self.upper_factor
    }

    /// The distribution of a unit's effective speed.
    pub fn distribution(&self, nominal_speed: u32) -> SpeedDistribution {
        let nominal = f64::from(nominal_speed);
        SpeedDistribution {
            lower: nominal * self.lower_factor,
            upper: nominal * self.upper_factor,
        }
    }

    pub fn distributions(&self, speeds: &[u32]) -> Vec<SpeedDistribution> {
        speeds.iter().map(|&s| self.distribution(s)).collect()
    }
}

impl Default for SpeedBand {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_LOWER_FACTOR, defaults::DEFAULT_UPPER_FACTOR)
    }
}

impl From<&SpeedBandConfig> for SpeedBand {
    fn from(config: &SpeedBandConfig) -> Self {
        Self::new(config.lower_factor, config.upper_factor)
    }
}

/// Continuous uniform distribution on `[lower, upper]`.
///
/// Zero width only for a nominal speed of 0; every operation stays defined
/// in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedDistribution {
    lower: f64,
    upper: f64,
}

impl SpeedDistribution {
    /// Distribution for `nominal_speed` under the default ±10% band.
    pub fn from_nominal(nominal_speed: u32) -> Self {
        SpeedBand::default().distribution(nominal_speed)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn is_degenerate(&self) -> bool {
        self.upper <= self.lower
    }

    pub fn mean(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Probability that a draw is strictly below `x`.
    pub fn probability_below(&self, x: f64) -> f64 {
        probability_below(self, x)
    }
}

/// Probability that a draw from `distribution` is below `x`.
///
/// A degenerate distribution is a step at `lower`: 0 up to and including it,
/// 1 above it. The division is only reached when `lower < x < upper`, so the
/// denominator is always positive.
pub fn probability_below(distribution: &SpeedDistribution, x: f64) -> f64 {
    if x <= distribution.lower {
        0.0
    } else if x >= distribution.upper {
        1.0
    } else {
        (x - distribution.lower) / (distribution.upper - distribution.lower)
    }
}

/// Probability that every draw is below `x`, i.e. the CDF of their maximum.
/// An empty set has no maximum and yields 1.
pub fn joint_probability_below(distributions: &[SpeedDistribution], x: f64) -> f64 {
    distributions
        .iter()
        .map(|d| probability_below(d, x))
        .product()
}

/// Smallest interval containing every support, or `None` for an empty set.
pub fn union_support<'a>(
    distributions: impl IntoIterator<Item = &'a SpeedDistribution>,
) -> Option<(f64, f64)> {
    distributions.into_iter().fold(None, |acc, d| match acc {
        None => Some((d.lower, d.upper)),
        Some((lo, hi)) => Some((lo.min(d.lower), hi.max(d.upper))),
    })
}
