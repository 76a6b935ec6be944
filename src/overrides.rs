//! Override paths and the override locator.
//!
//! An override path names a property relative to the root instance, either
//! parsed from dotted text (`"Home.Street"`) or built step by step:
//!
//! ```
//! use graphfill::OverridePath;
//!
//! let parsed: OverridePath = "Home.Street".parse().unwrap();
//! let built = OverridePath::property("Home").then("Street");
//! assert_eq!(parsed, built);
//! assert_eq!(built.leaf(), "Street");
//! ```
//!
//! Paths are resolved when the override is applied, against the populated
//! graph. Every intermediate property must already hold an instance.

use crate::error::{PopulateError, Result};
use model_core::{ModelInstance, ModelRegistry, Value};
use std::fmt;
use std::str::FromStr;

/// Chain of property accesses from the root instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverridePath {
    segments: Vec<String>,
}

impl OverridePath {
    /// Path to a property of the root instance.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Extend the path by one property access.
    pub fn then(mut self, name: impl Into<String>) -> Self {
        self.segments.push(name.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Name of the property the override assigns.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Intermediate properties leading to the owner of the leaf.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }
}

impl FromStr for OverridePath {
    type Err = PopulateError;

    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<String> = s.split('.').map(|segment| segment.trim().to_string()).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PopulateError::precondition(s, "path contains an empty segment"));
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for OverridePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Conversion into an override path, accepting dotted text or a built path.
pub trait IntoOverridePath {
    fn into_override_path(self) -> Result<OverridePath>;
}

impl IntoOverridePath for OverridePath {
    fn into_override_path(self) -> Result<OverridePath> {
        Ok(self)
    }
}

impl IntoOverridePath for &OverridePath {
    fn into_override_path(self) -> Result<OverridePath> {
        Ok(self.clone())
    }
}

impl IntoOverridePath for &str {
    fn into_override_path(self) -> Result<OverridePath> {
        self.parse()
    }
}

impl IntoOverridePath for String {
    fn into_override_path(self) -> Result<OverridePath> {
        self.parse()
    }
}

/// Walk `path` from `root` and return the instance owning the leaf property.
///
/// A single-segment path resolves to `root` itself.
pub fn locate_owner<'v>(
    root: &'v mut ModelInstance,
    path: &OverridePath,
) -> Result<&'v mut ModelInstance> {
    let mut owner = root;
    for segment in path.parents() {
        let model = owner.model().to_string();
        owner = match owner.get_mut(segment) {
            Some(Value::Model(next)) => next,
            Some(Value::Null) => {
                return Err(PopulateError::precondition(
                    path,
                    format!("'{segment}' is not set"),
                ))
            }
            Some(other) => {
                return Err(PopulateError::precondition(
                    path,
                    format!("'{segment}' holds {other}, not an instance"),
                ))
            }
            None => {
                return Err(PopulateError::precondition(
                    path,
                    format!("{model} has no property '{segment}'"),
                ))
            }
        };
    }
    Ok(owner)
}

/// Assign `value` to the property named by `path`.
///
/// The leaf must be a declared, writable property whose type accepts the
/// value. Exactly one property on one instance changes.
pub fn apply_override(
    registry: &ModelRegistry,
    root: &mut Value,
    path: &OverridePath,
    value: Value,
) -> Result<()> {
    let root = match root {
        Value::Model(instance) => instance,
        other => {
            return Err(PopulateError::precondition(
                path,
                format!("the built value {other} is not an instance"),
            ))
        }
    };
    let owner = locate_owner(root, path)?;
    let model = registry.resolve(owner.model())?;
    let leaf = path.leaf();

    let property = model.property(leaf).ok_or_else(|| {
        PopulateError::precondition(path, format!("{} has no property '{leaf}'", model.name))
    })?;
    if property.read_only {
        return Err(PopulateError::precondition(
            path,
            format!("'{leaf}' is read-only"),
        ));
    }
    if !property.property_type.accepts(&value) {
        return Err(PopulateError::TypeMismatch {
            property: path.to_string(),
            expected: property.property_type.clone(),
            value: value.to_string(),
        });
    }

    tracing::debug!("Overriding {path} with {value}");
    owner.set(leaf, value);
    Ok(())
}
