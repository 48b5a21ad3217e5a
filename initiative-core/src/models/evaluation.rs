use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::{InitiativeOutcome, Probability, Side, Unit, UnitId};

/// What question an evaluation answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationMode {
    /// Allies against enemies: does the fastest ally outpace the fastest enemy?
    Versus,
    /// Allies only: who is fastest within the team?
    Solo,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Versus => write!(f, "versus"),
            EvaluationMode::Solo => write!(f, "solo"),
        }
    }
}

/// Everything one evaluation needs. The engine reads nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRequest {
    pub mode: EvaluationMode,
    pub allies: Vec<Unit>,
    /// Ignored in solo mode.
    #[serde(default)]
    pub enemies: Vec<Unit>,
}

impl EvaluationRequest {
    pub fn versus(allies: Vec<Unit>, enemies: Vec<Unit>) -> Self {
        Self {
            mode: EvaluationMode::Versus,
            allies,
            enemies,
        }
    }

    pub fn solo(allies: Vec<Unit>) -> Self {
        Self {
            mode: EvaluationMode::Solo,
            allies,
            enemies: Vec::new(),
        }
    }
}

/// Probability that one unit draws the highest effective speed among the
/// units it was compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitProbability {
    pub id: UnitId,
    pub name: String,
    pub nominal_speed: u32,
    pub probability: Probability,
}

impl UnitProbability {
    pub fn new(unit: &Unit, side: Side, probability: Probability) -> Self {
        Self {
            id: unit.id(side),
            name: unit.name.clone(),
            nominal_speed: unit.nominal_speed,
            probability,
        }
    }
}

/// A unit's place in the presentation order. Ranks start at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedUnit {
    pub rank: usize,
    pub unit: UnitProbability,
}

/// Output of one evaluation pass. Built fresh each call, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    pub mode: EvaluationMode,
    /// One entry per evaluated unit, allies first, in roster order.
    pub per_unit: Vec<UnitProbability>,
    /// `per_unit` in presentation order.
    pub ranking: Vec<RankedUnit>,
    /// Probability the fastest ally draw beats the fastest enemy draw.
    /// Versus mode only.
    pub group_win_probability: Option<Probability>,
    /// Head-to-head of the nominally fastest ally against the nominally
    /// fastest enemy. Versus mode only.
    pub lead_matchup: Option<Probability>,
    /// Badge derived from `group_win_probability`. Versus mode only.
    pub outcome: Option<InitiativeOutcome>,
    /// Highest nominal speed among the allies.
    pub team_top_speed: u32,
}

impl EvaluationResult {
    /// Look up a unit's probability by identity.
    pub fn probability_of(&self, id: UnitId) -> Option<Probability> {
        self.per_unit
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.probability)
    }

    /// The unit ranked first, if any.
    pub fn leader(&self) -> Option<&RankedUnit> {
        self.ranking.first()
    }
}
