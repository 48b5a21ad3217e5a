//! Evaluation errors.

use super::error_code::{self, InitiativeErrorCode};
use crate::models::{EvaluationMode, Side};

/// Conditions under which an evaluation is not computable.
///
/// Degenerate distributions and numeric drift are not errors: the engine
/// handles them in place and always returns a probability in [0, 1].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("insufficient data for {mode} mode: {side} group has {found} unit(s) with a valid speed, needs {required}")]
    InsufficientData {
        mode: EvaluationMode,
        side: Side,
        required: usize,
        found: usize,
    },
}

impl InitiativeErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
        }
    }
}
