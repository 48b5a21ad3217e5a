//! Configuration for the Initiative engine.
//! TOML-based, resolved as: environment > file > compiled defaults.

pub mod defaults;
pub mod observability_config;
pub mod quadrature_config;
pub mod ranking_config;
pub mod roster_config;
pub mod speed_band_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use quadrature_config::QuadratureConfig;
pub use ranking_config::{OutcomeConfig, RankingConfig};
pub use roster_config::RosterConfig;
pub use speed_band_config::SpeedBandConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InitiativeConfig {
    pub quadrature: QuadratureConfig,
    pub speed_band: SpeedBandConfig,
    pub ranking: RankingConfig,
    pub outcome: OutcomeConfig,
    pub roster: RosterConfig,
    pub observability: ObservabilityConfig,
}

impl InitiativeConfig {
    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`INITIATIVE_*`)
    /// 2. The TOML file at `path`, when given
    /// 3. Compiled defaults
    ///
    /// The merged result is validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                config
            }
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `INITIATIVE_GROUP_SLICES`, `INITIATIVE_LOG_LEVEL`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<usize>("INITIATIVE_SINGLE_UNIT_SLICES") {
            self.quadrature.single_unit_slices = v;
        }
        if let Some(v) = env_parse::<usize>("INITIATIVE_GROUP_SLICES") {
            self.quadrature.group_slices = v;
        }
        if let Some(v) = env_parse::<usize>("INITIATIVE_PAIRWISE_SLICES") {
            self.quadrature.pairwise_slices = v;
        }
        if let Some(v) = env_parse::<f64>("INITIATIVE_TIE_TOLERANCE") {
            self.ranking.tie_tolerance = v;
        }
        if let Ok(level) = std::env::var("INITIATIVE_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.observability.log_level = level;
            }
        }
        if let Some(v) = env_parse::<bool>("INITIATIVE_JSON_LOGS") {
            self.observability.json_logs = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let q = &self.quadrature;
        for (field, slices) in [
            ("quadrature.single_unit_slices", q.single_unit_slices),
            ("quadrature.group_slices", q.group_slices),
            ("quadrature.pairwise_slices", q.pairwise_slices),
        ] {
            if slices == 0 {
                return Err(invalid(field, "must be at least 1"));
            }
        }

        let band = &self.speed_band;
        if !(0.0..=1.0).contains(&band.lower_factor) {
            return Err(invalid("speed_band.lower_factor", "must be between 0.0 and 1.0"));
        }
        if !band.upper_factor.is_finite() || band.upper_factor < 1.0 {
            return Err(invalid("speed_band.upper_factor", "must be finite and at least 1.0"));
        }
        if band.upper_factor <= band.lower_factor {
            // A zero-width band makes every nonzero speed a point mass.
            return Err(invalid(
                "speed_band.upper_factor",
                "must be greater than speed_band.lower_factor",
            ));
        }

        if !(0.0..1.0).contains(&self.ranking.tie_tolerance) {
            return Err(invalid("ranking.tie_tolerance", "must be in [0.0, 1.0)"));
        }

        let outcome = &self.outcome;
        if !(0.0..=1.0).contains(&outcome.guaranteed_threshold) {
            return Err(invalid("outcome.guaranteed_threshold", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&outcome.impossible_threshold) {
            return Err(invalid("outcome.impossible_threshold", "must be between 0.0 and 1.0"));
        }
        if outcome.impossible_threshold >= outcome.guaranteed_threshold {
            return Err(invalid(
                "outcome.impossible_threshold",
                "must be below outcome.guaranteed_threshold",
            ));
        }

        if self.roster.max_units_per_group == 0 {
            return Err(invalid("roster.max_units_per_group", "must be at least 1"));
        }
        if self.roster.default_unit_name.trim().is_empty() {
            return Err(invalid("roster.default_unit_name", "must not be blank"));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
