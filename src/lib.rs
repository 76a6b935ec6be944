//! Graphfill Library
//!
//! A test-data engine: given a model type, it constructs an instance and
//! recursively fills every property with plausible synthetic values, so test
//! authors never hand-write throwaway object graphs.
//!
//! # Features
//!
//! - Recursive population: strings, numbers, nested models and collections
//! - Conventions: name/type rules that override generation for matching properties
//! - Declared constraints: semantic kinds (email, postal code, phone, URL) and length bounds
//! - Constructor synthesis for models without a parameterless constructor
//! - Depth-bounded walking, so self-referencing graphs terminate
//! - Post-build overrides addressed by property paths (`"Home.Street"`)
//!
//! # Crates
//!
//! - `model_core` - type tokens, dynamic values and model metadata
//! - `value_generator` - the random value capability
//!
//! # Example
//!
//! ```rust
//! use graphfill::{AutoBuilder, ConventionFilter, ConventionRule};
//! use model_core::{ModelRegistry, TypeRef, Value};
//!
//! let registry = ModelRegistry::from_yaml(r#"
//! models:
//!   - name: Order
//!     properties:
//!       - name: Count
//!         type: int
//!       - name: Contact
//!         type: string
//!         constraints:
//!           data_type: email_address
//!       - name: Lines
//!         type: list<string>
//! "#).unwrap();
//!
//! let mut builder = AutoBuilder::for_model(&registry, "Order")
//!     .with_seed(42)
//!     .add_convention(ConventionRule::constant(
//!         ConventionFilter::Exact,
//!         "Count",
//!         TypeRef::Int,
//!         42,
//!     ));
//!
//! let order = builder.construct().unwrap().build();
//! assert_eq!(order.pointer("Count"), Some(&Value::Int(42)));
//! assert!(order.pointer("Contact").and_then(Value::as_str).unwrap().contains('@'));
//! assert_eq!(order.pointer("Lines").and_then(Value::as_list).unwrap().len(), 2);
//! ```

pub mod annotations;
pub mod builder;
pub mod config;
pub mod conventions;
pub mod error;
pub mod generate;
pub mod list;
pub mod overrides;
pub mod populate;
pub mod synthesize;

// Re-exports for convenience
pub use builder::{AutoBuilder, PopulatedBuilder, ValueRequest};
pub use config::PopulationConfiguration;
pub use conventions::{ConventionFactory, ConventionFilter, ConventionRule, Conventions};
pub use error::{PopulateError, Result};
pub use list::ListPopulator;
pub use overrides::{IntoOverridePath, OverridePath};
pub use populate::PopulationService;
