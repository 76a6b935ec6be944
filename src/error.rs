//! Error taxonomy for population runs.
//!
//! Every failure is deterministic in its inputs and aborts the current build;
//! nothing is retried.

use model_core::{SchemaError, TypeRef};

/// Error type for construction, population and override operations.
#[derive(Debug, thiserror::Error)]
pub enum PopulateError {
    /// Target cannot be instantiated (interface, abstract model or scalar target)
    #[error("Cannot instantiate '{type_name}': {reason}")]
    UnsupportedType { type_name: String, reason: String },

    /// Declared maximum length is smaller than the declared minimum
    #[error("Property {property}: the minimum string length ({minimum}) cannot be greater than the maximum string length ({maximum})")]
    InvalidConstraint {
        property: String,
        minimum: usize,
        maximum: usize,
    },

    /// Override path cannot be resolved against the built instance
    #[error("Cannot apply override '{path}': {reason}")]
    PreconditionViolation { path: String, reason: String },

    /// No constructor accepts the explicit arguments
    #[error("No constructor of '{model}' accepts the {arguments} supplied argument(s)")]
    NoMatchingConstructor { model: String, arguments: usize },

    /// Value not assignable to the declared type
    #[error("Value {value} is not assignable to '{property}' of type {expected}")]
    TypeMismatch {
        property: String,
        expected: TypeRef,
        value: String,
    },

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Model metadata error
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Error reading a configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a configuration file
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error handing the finished graph to serde
    #[error("Failed to serialize populated value: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PopulateError {
    pub(crate) fn unsupported(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(path: impl ToString, reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = PopulateError> = std::result::Result<T, E>;
