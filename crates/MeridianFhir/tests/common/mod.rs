use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads a JSON fixture from `tests/data/r4`.
pub fn load_fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "data", "r4", name]
        .iter()
        .collect();
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}

pub fn fixture_value(name: &str) -> serde_json::Value {
    serde_json::from_str(&load_fixture(name)).expect("Fixture is not valid JSON")
}

/// Decodes `name` as `T`, encodes it again and checks that nothing was lost
/// or added on the way.
pub fn assert_round_trip<T>(name: &str) -> T
where
    T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
{
    let source = load_fixture(name);
    let decoded: T = serde_json::from_str(&source)
        .unwrap_or_else(|e| panic!("Failed to decode {name}: {e}"));

    let encoded = serde_json::to_value(&decoded).expect("Failed to encode");
    assert_eq!(encoded, fixture_value(name), "{name} changed on round trip");

    let text = serde_json::to_string(&decoded).expect("Failed to encode");
    let again: T = serde_json::from_str(&text).expect("Failed to decode re-encoded JSON");
    assert_eq!(again, decoded);
    decoded
}
