//! The random-value capability consumed by the population engine.

use crate::generators::{numeric, semantic, text};
use crate::options::StringRequest;
use model_core::SemanticKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every synthesized value.
///
/// Implementations must accept inverted bounds without panicking.
pub trait Randomizer {
    /// Random integer in `[min, max]`.
    fn integer(&mut self, min: i32, max: i32) -> i32;

    /// Random double in `[min, max]`.
    fn double(&mut self, min: f64, max: f64) -> f64;

    /// Random boolean.
    fn boolean(&mut self) -> bool;

    /// Random string satisfying `request`.
    fn string(&mut self, request: &StringRequest) -> String;

    /// Random string of a semantic kind.
    fn semantic(&mut self, kind: SemanticKind) -> String;
}

/// `Randomizer` backed by a `rand` RNG.
///
/// Use [`RandRandomizer::seeded`] for reproducible output across runs.
#[derive(Debug, Clone)]
pub struct RandRandomizer<R = StdRng> {
    rng: R,
}

impl RandRandomizer<StdRng> {
    /// Create a randomizer seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic randomizer from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandRandomizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandRandomizer<R> {
    /// Wrap an existing RNG.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the underlying RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Randomizer for RandRandomizer<R> {
    fn integer(&mut self, min: i32, max: i32) -> i32 {
        numeric::random_integer(&mut self.rng, min, max)
    }

    fn double(&mut self, min: f64, max: f64) -> f64 {
        numeric::random_double(&mut self.rng, min, max)
    }

    fn boolean(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn string(&mut self, request: &StringRequest) -> String {
        text::random_string(&mut self.rng, request)
    }

    fn semantic(&mut self, kind: SemanticKind) -> String {
        semantic::random_semantic(&mut self.rng, kind)
    }
}
