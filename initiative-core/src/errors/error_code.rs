//! InitiativeErrorCode trait for the UI boundary.

/// Trait for converting Initiative errors to stable error codes.
/// The roster/UI layer switches on the code to pick a placeholder
/// instead of parsing the message.
pub trait InitiativeErrorCode {
    /// Returns the error code string (e.g., "INSUFFICIENT_DATA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
