use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One raw row as the roster UI submits it: both fields are free text and
/// either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RosterEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, speed: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            speed: Some(speed.into()),
        }
    }

    /// A row with a speed but no name.
    pub fn unnamed(speed: impl Into<String>) -> Self {
        Self {
            name: None,
            speed: Some(speed.into()),
        }
    }
}
