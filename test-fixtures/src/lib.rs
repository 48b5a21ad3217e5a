//! Test fixture loader for Initiative golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// A golden evaluation scenario: bare speeds in, expected probabilities out.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    /// `"versus"` or `"solo"`.
    pub mode: String,
    pub allies: Vec<u32>,
    #[serde(default)]
    pub enemies: Vec<u32>,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    /// `None` when the scenario must be rejected as insufficient data.
    #[serde(default)]
    pub group_win_probability: Option<f64>,
    /// Allies first, then enemies, in roster order.
    #[serde(default)]
    pub per_unit: Vec<f64>,
    /// `(side, index)` pairs in expected presentation order.
    #[serde(default)]
    pub ranking: Vec<(String, usize)>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub insufficient_data: bool,
    /// Absolute tolerance for every probability in this scenario.
    pub tolerance: f64,
}

/// Load every golden scenario under `golden/`.
pub fn load_golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden")
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| load_fixture(&format!("golden/{}", name.to_string_lossy())))
        .collect()
}
