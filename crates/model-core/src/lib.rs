//! Core types for the graphfill test-data engine.
//!
//! This crate provides the foundational types used across the workspace,
//! including:
//!
//! - [`TypeRef`] - Type tokens for properties, constructor parameters and build targets
//! - [`Value`] - Dynamic values held by populated instances
//! - [`ModelInstance`] - An object under construction, with properties in declaration order
//! - [`ModelRegistry`] - Model metadata (properties, constraints, constructors) loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! model-core (this crate)
//!    │
//!    ├─── value-generator   (semantic kinds for random strings)
//!    │
//!    └─── graphfill         (population engine, builder, overrides)
//! ```
//!
//! # Example
//!
//! ```rust
//! use model_core::{ModelRegistry, TypeRef, Value};
//!
//! let registry = ModelRegistry::from_yaml(r#"
//! models:
//!   - name: Person
//!     properties:
//!       - name: Name
//!         type: string
//!       - name: Age
//!         type: int
//!       - name: Nicknames
//!         type: list<string>
//! "#).unwrap();
//!
//! let person = registry.get("Person").unwrap();
//! let instance = person.instantiate();
//! assert_eq!(instance.get("Age"), Some(&Value::Int(0)));
//! assert_eq!(person.property("Nicknames").unwrap().property_type, TypeRef::list(TypeRef::String));
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{
    ConstructorDefinition, ModelDefinition, ModelKind, ModelRegistry, ParameterDefinition,
    PropertyConstraints, PropertyDescriptor, SchemaError, SemanticKind, StringLength,
};
pub use types::{TypeParseError, TypeRef};
pub use values::{ModelInstance, Value};
