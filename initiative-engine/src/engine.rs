use initiative_core::config::InitiativeConfig;
use initiative_core::constants::{MIN_UNITS_SOLO, MIN_UNITS_VERSUS};
use initiative_core::errors::{ConfigError, EvaluationError, InitiativeResult};
use initiative_core::evaluation_span;
use initiative_core::models::{
    EvaluationMode, EvaluationRequest, EvaluationResult, InitiativeOutcome, Probability,
    RosterEntry, Side, Unit, UnitProbability,
};
use initiative_core::traits::IInitiativeEvaluator;

use crate::distribution::{SpeedBand, SpeedDistribution};
use crate::estimators::{group, head_to_head, single_unit};
use crate::intake;
use crate::ranking::RankingComposer;

/// Evaluates turn-order probabilities for a roster snapshot.
///
/// Holds only immutable configuration; every call builds its distributions
/// and result from scratch.
#[derive(Debug, Clone)]
pub struct InitiativeEngine {
    config: InitiativeConfig,
    band: SpeedBand,
    ranking: RankingComposer,
}

impl InitiativeEngine {
    /// Create an engine with the compiled defaults.
    pub fn new() -> Self {
        Self::from_valid_config(InitiativeConfig::default())
    }

    /// Create an engine from a configuration, validating it first.
    pub fn with_config(config: InitiativeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: InitiativeConfig) -> Self {
        Self {
            band: SpeedBand::from(&config.speed_band),
            ranking: RankingComposer::from(&config.ranking),
            config,
        }
    }

    pub fn config(&self) -> &InitiativeConfig {
        &self.config
    }

    /// Turn raw roster rows for one side into units.
    pub fn intake(&self, entries: &[RosterEntry], side: Side) -> Vec<Unit> {
        intake::collect_units(entries, side, &self.config.roster)
    }

    /// Intake both sides of a raw roster and evaluate it in `mode`.
    /// `enemy_entries` is ignored in solo mode.
    pub fn evaluate_roster(
        &self,
        mode: EvaluationMode,
        ally_entries: &[RosterEntry],
        enemy_entries: &[RosterEntry],
    ) -> InitiativeResult<EvaluationResult> {
        let allies = self.intake(ally_entries, Side::Ally);
        match mode {
            EvaluationMode::Versus => {
                let enemies = self.intake(enemy_entries, Side::Enemy);
                self.evaluate_group_mode(&allies, &enemies)
            }
            EvaluationMode::Solo => self.evaluate_solo_mode(&allies),
        }
    }

    /// Allies against enemies.
    ///
    /// Every unit is scored against all other units on both sides, and the
    /// group win probability is the chance the fastest ally draw beats the
    /// fastest enemy draw. Either side empty is `InsufficientData`.
    pub fn evaluate_group_mode(
        &self,
        allies: &[Unit],
        enemies: &[Unit],
    ) -> InitiativeResult<EvaluationResult> {
        let _span = evaluation_span!(EvaluationMode::Versus, allies.len(), enemies.len()).entered();

        require(EvaluationMode::Versus, Side::Ally, allies.len(), MIN_UNITS_VERSUS)?;
        require(EvaluationMode::Versus, Side::Enemy, enemies.len(), MIN_UNITS_VERSUS)?;

        let ally_dists = self.distributions(allies);
        let enemy_dists = self.distributions(enemies);

        let entrants: Vec<(Side, &Unit, SpeedDistribution)> = allies
            .iter()
            .zip(&ally_dists)
            .map(|(u, d)| (Side::Ally, u, *d))
            .chain(
                enemies
                    .iter()
                    .zip(&enemy_dists)
                    .map(|(u, d)| (Side::Enemy, u, *d)),
            )
            .collect();
        let per_unit = self.contest(&entrants);

        // Both groups passed `require`, so the estimate is never `None`.
        let group_win = group::estimate(
            &ally_dists,
            &enemy_dists,
            self.config.quadrature.group_slices,
        )
        .unwrap_or(Probability::ZERO);

        let lead_matchup = match (fastest(allies), fastest(enemies)) {
            (Some(ally), Some(enemy)) => Some(head_to_head::estimate(
                &self.band.distribution(ally.nominal_speed),
                &self.band.distribution(enemy.nominal_speed),
                self.config.quadrature.pairwise_slices,
            )),
            _ => None,
        };

        let outcome = InitiativeOutcome::classify(group_win, &self.config.outcome);
        tracing::debug!(
            group_win = group_win.value(),
            lead_matchup = ?lead_matchup.map(Probability::value),
            ?outcome,
            "versus evaluation complete"
        );

        Ok(EvaluationResult {
            mode: EvaluationMode::Versus,
            ranking: self.ranking.rank(&per_unit),
            per_unit,
            group_win_probability: Some(group_win),
            lead_matchup,
            outcome: Some(outcome),
            team_top_speed: top_speed(allies),
        })
    }

    /// Allies only: each unit against its teammates.
    ///
    /// Fewer than two allies is `InsufficientData`; a lone unit has nothing
    /// to be compared against.
    pub fn evaluate_solo_mode(&self, allies: &[Unit]) -> InitiativeResult<EvaluationResult> {
        let _span = evaluation_span!(EvaluationMode::Solo, allies.len(), 0usize).entered();

        require(EvaluationMode::Solo, Side::Ally, allies.len(), MIN_UNITS_SOLO)?;

        let entrants: Vec<(Side, &Unit, SpeedDistribution)> = allies
            .iter()
            .zip(self.distributions(allies))
            .map(|(u, d)| (Side::Ally, u, d))
            .collect();
        let per_unit = self.contest(&entrants);
        tracing::debug!(units = per_unit.len(), "solo evaluation complete");

        Ok(EvaluationResult {
            mode: EvaluationMode::Solo,
            ranking: self.ranking.rank(&per_unit),
            per_unit,
            group_win_probability: None,
            lead_matchup: None,
            outcome: None,
            team_top_speed: top_speed(allies),
        })
    }

    fn distributions(&self, units: &[Unit]) -> Vec<SpeedDistribution> {
        units
            .iter()
            .map(|u| self.band.distribution(u.nominal_speed))
            .collect()
    }

    /// Each entrant's probability of drawing the highest speed of all entrants.
    fn contest(&self, entrants: &[(Side, &Unit, SpeedDistribution)]) -> Vec<UnitProbability> {
        entrants
            .iter()
            .enumerate()
            .map(|(i, (side, unit, dist))| {
                let others: Vec<SpeedDistribution> = entrants
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, (_, _, d))| *d)
                    .collect();
                let p = single_unit::estimate(
                    dist,
                    &others,
                    self.config.quadrature.single_unit_slices,
                );
                UnitProbability::new(unit, *side, p)
            })
            .collect()
    }
}

impl Default for InitiativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IInitiativeEvaluator for InitiativeEngine {
    fn evaluate(&self, request: &EvaluationRequest) -> InitiativeResult<EvaluationResult> {
        match request.mode {
            EvaluationMode::Versus => self.evaluate_group_mode(&request.allies, &request.enemies),
            EvaluationMode::Solo => self.evaluate_solo_mode(&request.allies),
        }
    }
}

fn require(
    mode: EvaluationMode,
    side: Side,
    found: usize,
    required: usize,
) -> Result<(), EvaluationError> {
    if found < required {
        tracing::debug!(%mode, %side, found, required, "not enough units to evaluate");
        return Err(EvaluationError::InsufficientData {
            mode,
            side,
            required,
            found,
        });
    }
    Ok(())
}

/// Nominally fastest unit; the earliest in the roster wins a tie.
fn fastest(units: &[Unit]) -> Option<&Unit> {
    units.iter().reduce(|best, u| {
        if u.nominal_speed > best.nominal_speed {
            u
        } else {
            best
        }
    })
}

fn top_speed(units: &[Unit]) -> u32 {
    fastest(units).map_or(0, |u| u.nominal_speed)
}
