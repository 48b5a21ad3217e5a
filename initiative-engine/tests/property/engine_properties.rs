//! Property-based tests for the turn-order estimators.

use initiative_core::models::{units_from_speeds, Probability, Side, Unit, UnitProbability};
use initiative_engine::distribution::SpeedDistribution;
use initiative_engine::{
    advantage_probability, group_advantage_probability, head_to_head_probability,
    probability_below, InitiativeEngine, RankingComposer,
};
use proptest::prelude::*;

fn speed() -> impl Strategy<Value = u32> {
    1u32..30_000
}

fn group(max: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(speed(), 1..=max)
}

proptest! {
    #[test]
    fn cdf_is_bounded_and_exact_outside_support(s in 0u32..30_000, x in -1_000.0f64..40_000.0) {
        let d = SpeedDistribution::from_nominal(s);
        let p = probability_below(&d, x);
        prop_assert!((0.0..=1.0).contains(&p));
        if x <= d.lower() {
            prop_assert_eq!(p, 0.0);
        } else if x >= d.upper() {
            prop_assert_eq!(p, 1.0);
        }
    }

    #[test]
    fn cdf_is_monotone(s in 0u32..30_000, x in 0.0f64..35_000.0, dx in 0.0f64..5_000.0) {
        let d = SpeedDistribution::from_nominal(s);
        prop_assert!(probability_below(&d, x) <= probability_below(&d, x + dx));
    }

    #[test]
    fn single_unit_is_bounded(target in speed(), others in prop::collection::vec(0u32..30_000, 0..8)) {
        let p = advantage_probability(target, &others).value();
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn single_unit_is_monotone_in_target_speed(
        target in 1u32..29_000,
        bump in 1u32..1_000,
        others in group(7),
    ) {
        let slow = advantage_probability(target, &others).value();
        let fast = advantage_probability(target + bump, &others).value();
        prop_assert!(fast >= slow - 1e-12, "{} < {}", fast, slow);
    }

    #[test]
    fn group_is_bounded(a in group(8), b in group(8)) {
        let p = group_advantage_probability(&a, &b).unwrap().value();
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn group_complements_sum_to_one(a in group(4), b in group(4)) {
        let ab = group_advantage_probability(&a, &b).unwrap().value();
        let ba = group_advantage_probability(&b, &a).unwrap().value();
        prop_assert!((ab + ba - 1.0).abs() < 0.01, "{} + {}", ab, ba);
    }

    #[test]
    fn group_is_monotone_in_ally_speed(
        a in group(4),
        b in group(4),
        which in any::<prop::sample::Index>(),
        bump in 1u32..2_000,
    ) {
        let mut faster = a.clone();
        let i = which.index(faster.len());
        faster[i] += bump;
        let before = group_advantage_probability(&a, &b).unwrap().value();
        let after = group_advantage_probability(&faster, &b).unwrap().value();
        prop_assert!(after >= before - 0.005, "{} -> {}", before, after);
    }

    #[test]
    fn head_to_head_is_bounded_and_antisymmetric(a in speed(), b in speed()) {
        let ab = head_to_head_probability(a, b).value();
        let ba = head_to_head_probability(b, a).value();
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab + ba - 1.0).abs() < 0.01, "{} + {}", ab, ba);
    }

    #[test]
    fn solo_probabilities_sum_to_one(allies in prop::collection::vec(speed(), 2..=8)) {
        let result = InitiativeEngine::new()
            .evaluate_solo_mode(&units_from_speeds(&allies))
            .unwrap();
        let total: f64 = result.per_unit.iter().map(|u| u.probability.value()).sum();
        prop_assert!((total - 1.0).abs() < 0.01, "sum {}", total);
    }

    #[test]
    fn versus_results_are_bounded(a in group(8), b in group(8)) {
        let result = InitiativeEngine::new()
            .evaluate_group_mode(&units_from_speeds(&a), &units_from_speeds(&b))
            .unwrap();
        prop_assert_eq!(result.per_unit.len(), a.len() + b.len());
        for unit in &result.per_unit {
            prop_assert!((0.0..=1.0).contains(&unit.probability.value()));
        }
        let lead = result.lead_matchup.unwrap().value();
        prop_assert!((0.0..=1.0).contains(&lead));
    }

    #[test]
    fn ranking_is_deterministic_and_complete(
        rows in prop::collection::vec((0u32..30_000, 0.0f64..1.0, any::<bool>()), 0..16),
    ) {
        let units: Vec<UnitProbability> = rows
            .iter()
            .enumerate()
            .map(|(i, &(s, p, ally))| {
                let side = if ally { Side::Ally } else { Side::Enemy };
                UnitProbability::new(&Unit::new("u", s, i), side, Probability::new(p))
            })
            .collect();
        let composer = RankingComposer::default();
        let first = composer.rank(&units);
        let mut reversed = units.clone();
        reversed.reverse();
        let second = composer.rank(&reversed);

        prop_assert_eq!(first.len(), units.len());
        prop_assert_eq!(&first, &second);
        for (i, ranked) in first.iter().enumerate() {
            prop_assert_eq!(ranked.rank, i + 1);
        }
        // No entry trails one it beats by the tolerance or more.
        for (i, earlier) in first.iter().enumerate() {
            for later in &first[i + 1..] {
                let gap = later.unit.probability.value() - earlier.unit.probability.value();
                prop_assert!(gap < composer.tie_tolerance(), "gap {}", gap);
            }
        }
    }
}
