use super::{ConfigError, EvaluationError, InitiativeErrorCode};

/// Top-level error aggregating the subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum InitiativeError {
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl InitiativeError {
    /// True when the caller should render a "waiting for input" placeholder.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            Self::Evaluation(EvaluationError::InsufficientData { .. })
        )
    }
}

impl InitiativeErrorCode for InitiativeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Evaluation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type InitiativeResult<T> = Result<T, InitiativeError>;
