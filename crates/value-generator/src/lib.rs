//! Random value generation for the graphfill test-data engine.
//!
//! This crate provides the [`Randomizer`] capability the population engine
//! draws every synthesized value from. The engine never touches an entropy
//! source directly, so callers can swap in a seeded or scripted randomizer.
//!
//! # Architecture
//!
//! ```text
//! graphfill (population engine)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  dyn Randomizer      │
//! │                      │
//! │  - integer / double  │
//! │  - boolean           │
//! │  - string(request)   │
//! │  - semantic(kind)    │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   RandRandomizer<StdRng>  →  generators::{numeric, text, semantic}
//! ```
//!
//! # Example
//!
//! ```rust
//! use value_generator::{Casing, CharacterSet, RandRandomizer, Randomizer, StringRequest};
//!
//! let mut randomizer = RandRandomizer::seeded(42);
//! let code = randomizer.string(
//!     &StringRequest::new(6, 6)
//!         .with_character_set(CharacterSet::Alphabetic)
//!         .with_casing(Casing::Uppercase),
//! );
//! assert_eq!(code.chars().count(), 6);
//! assert!(code.chars().all(|c| c.is_ascii_uppercase()));
//! ```

pub mod generators;
pub mod options;
pub mod randomizer;

// Re-exports for convenience
pub use model_core::SemanticKind;
pub use options::{Casing, CharacterSet, Language, Spaces, StringRequest};
pub use randomizer::{RandRandomizer, Randomizer};
