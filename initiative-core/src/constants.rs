/// Initiative engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest group the roster collaborator is expected to hand over.
pub const MAX_UNITS_PER_GROUP: usize = 8;

/// Minimum units in a group before a versus evaluation is computable.
pub const MIN_UNITS_VERSUS: usize = 1;

/// Minimum allies before a solo evaluation has anything to compare.
pub const MIN_UNITS_SOLO: usize = 2;
