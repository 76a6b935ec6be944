//! Population integration tests.
//!
//! These tests load the YAML fixtures under `tests/fixtures/`, build models
//! end to end through `AutoBuilder` with seeded randomness, and check the
//! populated graphs.

mod annotations;
mod overrides;
mod scenarios;

use model_core::ModelRegistry;
use std::path::PathBuf;

pub const SEED: u64 = 42;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn registry() -> ModelRegistry {
    ModelRegistry::from_file(fixture("models.yaml")).expect("fixture schema should load")
}
