//! Compiled defaults for every configuration section.

// Quadrature. More slices trade call cost for a smaller discretization error;
// these counts keep the error well under one percentage point for speeds in
// the thousands-to-tens-of-thousands range.
pub const DEFAULT_SINGLE_UNIT_SLICES: usize = 60;
pub const DEFAULT_GROUP_SLICES: usize = 120;
pub const DEFAULT_PAIRWISE_SLICES: usize = 50;

// Speed band: effective speed is uniform on [nominal × lower, nominal × upper].
pub const DEFAULT_LOWER_FACTOR: f64 = 0.9;
pub const DEFAULT_UPPER_FACTOR: f64 = 1.1;

// Ranking: probabilities closer than this are treated as tied so the order
// does not flicker on floating-point noise.
pub const DEFAULT_TIE_TOLERANCE: f64 = 0.0001;

// Outcome classification for the UI badge.
pub const DEFAULT_GUARANTEED_THRESHOLD: f64 = 0.999;
pub const DEFAULT_IMPOSSIBLE_THRESHOLD: f64 = 0.001;

// Roster
pub const DEFAULT_MAX_UNITS_PER_GROUP: usize = crate::constants::MAX_UNITS_PER_GROUP;
pub const DEFAULT_UNIT_NAME: &str = "Unnamed";

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
