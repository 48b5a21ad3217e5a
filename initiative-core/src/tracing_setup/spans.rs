//! Span definitions per operation: evaluation, intake.

/// Create an evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($mode:expr, $allies:expr, $enemies:expr) => {
        tracing::info_span!(
            "initiative.evaluate",
            mode = %$mode,
            allies = $allies,
            enemies = $enemies
        )
    };
}

/// Create a roster intake span.
#[macro_export]
macro_rules! intake_span {
    ($side:expr, $rows:expr) => {
        tracing::debug_span!("initiative.intake", side = %$side, rows = $rows)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EVALUATE: &str = "initiative.evaluate";
    pub const INTAKE: &str = "initiative.intake";
}
