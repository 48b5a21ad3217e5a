//! # initiative-core
//!
//! Foundation crate for the Initiative turn-order engine.
//! Defines all types, traits, errors, config, and constants.
//! The engine crate and the test fixtures depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::InitiativeConfig;
pub use errors::{InitiativeError, InitiativeResult};
pub use models::{
    EvaluationMode, EvaluationRequest, EvaluationResult, InitiativeOutcome, Probability,
    RosterEntry, Side, Unit, UnitId,
};
