//! Error handling for Initiative.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod evaluation_error;
pub mod initiative_error;

pub use config_error::ConfigError;
pub use error_code::InitiativeErrorCode;
pub use evaluation_error::EvaluationError;
pub use initiative_error::{InitiativeError, InitiativeResult};
