//! Format tests
//!
//! Serializer output for each registered format, checked against inline snapshots.

mod json;
mod outline;
mod treeviz;

use std::path::PathBuf;

/// Read a fixture from tests/fixtures
pub(crate) fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
