use initiative_core::config::OutcomeConfig;
use initiative_core::models::{InitiativeOutcome, Probability};
use proptest::prelude::*;

proptest! {
    #[test]
    fn probability_always_in_unit_interval(raw in proptest::num::f64::ANY) {
        let p = Probability::new(raw).value();
        prop_assert!((0.0..=1.0).contains(&p), "out of bounds: {}", p);
    }

    #[test]
    fn probability_preserves_in_range_values(raw in 0.0f64..=1.0) {
        prop_assert_eq!(Probability::new(raw).value(), raw);
    }

    #[test]
    fn classification_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let t = OutcomeConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |o: InitiativeOutcome| match o {
            InitiativeOutcome::Impossible => 0,
            InitiativeOutcome::Contested => 1,
            InitiativeOutcome::Guaranteed => 2,
        };
        prop_assert!(
            rank(InitiativeOutcome::classify(Probability::new(lo), &t))
                <= rank(InitiativeOutcome::classify(Probability::new(hi), &t))
        );
    }
}
