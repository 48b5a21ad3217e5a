use crate::errors::InitiativeResult;
use crate::models::{EvaluationRequest, EvaluationResult};

/// Turn-order evaluation over an explicit request.
///
/// Implementations are pure: the same request always yields the same result
/// and no state is shared between calls.
pub trait IInitiativeEvaluator: Send + Sync {
    /// Evaluate the request in the mode it names.
    fn evaluate(&self, request: &EvaluationRequest) -> InitiativeResult<EvaluationResult>;
}
