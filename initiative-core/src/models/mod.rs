pub mod evaluation;
pub mod outcome;
pub mod probability;
pub mod roster;
pub mod unit;

pub use evaluation::{
    EvaluationMode, EvaluationRequest, EvaluationResult, RankedUnit, UnitProbability,
};
pub use outcome::InitiativeOutcome;
pub use probability::Probability;
pub use roster::RosterEntry;
pub use unit::{units_from_speeds, Side, Unit, UnitId};
