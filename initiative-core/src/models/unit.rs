use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Which group a unit belongs to.
///
/// Ordering is part of the ranking tie-break: allies sort before enemies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Side {
    Ally,
    Enemy,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Ally => write!(f, "ally"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Stable identity of a unit within one evaluation: its side and its
/// insertion-order position in that side's roster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct UnitId {
    pub side: Side,
    pub index: usize,
}

impl UnitId {
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.side, self.index)
    }
}

/// A roster snapshot entry with a valid speed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Unit {
    /// Display label, never empty once the roster intake has run.
    pub name: String,
    /// Stated speed before per-turn variance.
    pub nominal_speed: u32,
    /// Position in the submitted roster. Only used for tie-breaking.
    pub original_index: usize,
}

impl Unit {
    pub fn new(name: impl Into<String>, nominal_speed: u32, original_index: usize) -> Self {
        Self {
            name: name.into(),
            nominal_speed,
            original_index,
        }
    }

    /// Identity of this unit when placed on `side`.
    pub fn id(&self, side: Side) -> UnitId {
        UnitId::new(side, self.original_index)
    }
}

/// Build a roster from bare speeds, naming units by position.
pub fn units_from_speeds(speeds: &[u32]) -> Vec<Unit> {
    speeds
        .iter()
        .enumerate()
        .map(|(i, &speed)| Unit::new(format!("Unit {}", i + 1), speed, i))
        .collect()
}
