//! Test fixtures for loading query descriptions from JSON files.

use serde_json::Value;

/// Load a fixture from the fixtures directory
pub fn load_fixture(name: &str) -> Value {
    let fixture_path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let content = std::fs::read_to_string(&fixture_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", fixture_path));

    serde_json::from_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse JSON fixture: {}", fixture_path))
}

/// Filter scenarios: each has `comparisons` (field, op, value) and `expected`.
pub fn filter_scenarios() -> Vec<Value> {
    load_fixture("filter_scenarios.json")
        .as_array()
        .cloned()
        .unwrap_or_default()
}
