//! Presentation order for per-unit probabilities.
//!
//! Keys, in order:
//! 1. probability, descending, with near-equal values treated as tied,
//! 2. nominal speed, descending,
//! 3. original roster index, ascending (allies before enemies at equal index).
//!
//! "Near-equal" is resolved in bands: after a strict sort by probability,
//! an entry joins the current band while it is within the tolerance of the
//! band's first entry, and each band is re-sorted by the tie-break keys.
//! Anchoring on the first entry keeps every band narrower than the tolerance,
//! so an entry never trails one it beats by the tolerance or more.

use std::cmp::Ordering;

use initiative_core::config::{defaults, RankingConfig};
use initiative_core::models::{RankedUnit, UnitProbability};

/// Orders per-unit results for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingComposer {
    tie_tolerance: f64,
}

impl RankingComposer {
    pub fn new(tie_tolerance: f64) -> Self {
        Self { tie_tolerance }
    }

    pub fn tie_tolerance(&self) -> f64 {
        self.tie_tolerance
    }

    /// Rank `units`. Identical input always yields the identical order.
    pub fn rank(&self, units: &[UnitProbability]) -> Vec<RankedUnit> {
        let mut ordered: Vec<&UnitProbability> = units.iter().collect();
        ordered.sort_by(|a, b| {
            b.probability
                .value()
                .total_cmp(&a.probability.value())
                .then_with(|| tie_break(a, b))
        });

        let mut bands: Vec<Vec<&UnitProbability>> = Vec::new();
        for unit in ordered {
            match bands.last_mut() {
                Some(band) if self.is_tied(band, unit) => band.push(unit),
                _ => bands.push(vec![unit]),
            }
        }

        bands
            .into_iter()
            .flat_map(|mut band| {
                band.sort_by(|a, b| tie_break(a, b));
                band
            })
            .enumerate()
            .map(|(i, unit)| RankedUnit {
                rank: i + 1,
                unit: unit.clone(),
            })
            .collect()
    }

    fn is_tied(&self, band: &[&UnitProbability], unit: &UnitProbability) -> bool {
        band.first().is_some_and(|anchor| {
            (anchor.probability.value() - unit.probability.value()).abs() < self.tie_tolerance
        })
    }
}

impl Default for RankingComposer {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_TIE_TOLERANCE)
    }
}

impl From<&RankingConfig> for RankingComposer {
    fn from(config: &RankingConfig) -> Self {
        Self::new(config.tie_tolerance)
    }
}

fn tie_break(a: &UnitProbability, b: &UnitProbability) -> Ordering {
    b.nominal_speed
        .cmp(&a.nominal_speed)
        .then_with(|| a.id.index.cmp(&b.id.index))
        .then_with(|| a.id.side.cmp(&b.id.side))
}
