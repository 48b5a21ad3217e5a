//! Raw roster rows → `Unit` snapshots.
//!
//! Rows whose speed is missing, blank, negative, or not an integer are
//! dropped before any distribution is built; they are never read as zero.
//! Blank names get the configured default. `original_index` is the row's
//! position as submitted, so indices of surviving units may have gaps.

use initiative_core::config::RosterConfig;
use initiative_core::models::{RosterEntry, Side, Unit};
use initiative_core::intake_span;

/// Parse a speed field. Surrounding whitespace is ignored.
pub fn parse_speed(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Build the unit snapshot for one side of the roster.
pub fn collect_units(entries: &[RosterEntry], side: Side, config: &RosterConfig) -> Vec<Unit> {
    let _span = intake_span!(side, entries.len()).entered();

    let units: Vec<Unit> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let Some(speed) = entry.speed.as_deref().and_then(parse_speed) else {
                tracing::debug!(%side, index, raw = ?entry.speed, "skipping row without a valid speed");
                return None;
            };
            let name = entry
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(config.default_unit_name.as_str());
            Some(Unit::new(name, speed, index))
        })
        .collect();

    if units.len() > config.max_units_per_group {
        tracing::warn!(
            %side,
            count = units.len(),
            max = config.max_units_per_group,
            "group exceeds the configured roster size"
        );
    }
    units
}
