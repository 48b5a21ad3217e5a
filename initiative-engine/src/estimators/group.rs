//! Probability that group A's fastest draw beats group B's fastest draw.
//!
//! With `F_A(x) = Π_{a∈A} F_a(x)` the CDF of A's maximum (likewise `F_B`):
//!
//! ```text
//! P(max A > max B) = ∫ F_B(x) dF_A(x)
//!                  ≈ Σ_i [F_A(e_{i+1}) − F_A(e_i)] · F_B(m_i)
//! ```
//!
//! over `M` equal slices `[e_i, e_{i+1}]` of the union support of every
//! distribution involved, `m_i` being the slice midpoint. Each term is the
//! probability mass of A's maximum inside the slice times the chance B's
//! maximum is below the slice, so the terms are summed, not averaged.

use initiative_core::config::defaults::DEFAULT_GROUP_SLICES;
use initiative_core::Probability;

use crate::distribution::{joint_probability_below, union_support, SpeedBand, SpeedDistribution};

/// Group advantage of `group_a_speeds` over `group_b_speeds` using the
/// default band and slice count.
///
/// Returns `None` when either group is empty: the maximum of an empty group
/// is undefined and the caller must report that instead of a number.
pub fn group_advantage_probability(
    group_a_speeds: &[u32],
    group_b_speeds: &[u32],
) -> Option<Probability> {
    let band = SpeedBand::default();
    estimate(
        &band.distributions(group_a_speeds),
        &band.distributions(group_b_speeds),
        DEFAULT_GROUP_SLICES,
    )
}

/// Finite-difference quadrature of `P(max A > max B)` over `slices` slices.
///
/// When every distribution is a single point at the same value the support
/// has zero width, every slice difference is zero and the result is 0: an
/// exact tie is not a win.
pub fn estimate(
    group_a: &[SpeedDistribution],
    group_b: &[SpeedDistribution],
    slices: usize,
) -> Option<Probability> {
    if group_a.is_empty() || group_b.is_empty() {
        return None;
    }
    let (min_limit, max_limit) = union_support(group_a.iter().chain(group_b))?;
    let slices = slices.max(1);
    let dx = (max_limit - min_limit) / slices as f64;

    let mut total = 0.0;
    let mut p_a_max_below_prev = joint_probability_below(group_a, min_limit);
    for i in 0..slices {
        // Pin the final edge so rounding cannot leave mass above it.
        let edge = if i + 1 == slices {
            max_limit
        } else {
            min_limit + dx * (i + 1) as f64
        };
        let x = min_limit + dx * (i as f64 + 0.5);

        let p_a_max_below_x = joint_probability_below(group_a, edge);
        let p_a_max_is_x = p_a_max_below_x - p_a_max_below_prev;
        let p_b_max_below_x = joint_probability_below(group_b, x);

        total += p_a_max_is_x * p_b_max_below_x;
        p_a_max_below_prev = p_a_max_below_x;
    }

    Some(Probability::new(total))
}
