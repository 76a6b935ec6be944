//! Model metadata for the graphfill engine.
//!
//! This module is the introspection layer the population engine works
//! against: which models exist, which properties they declare (with type
//! and constraints), and which constructors they offer.
//!
//! ## Type Hierarchy
//!
//! - `PropertyDescriptor` - Settable property with declared type and constraints
//! - `ConstructorDefinition` - Ordered, typed constructor parameters
//! - `ModelDefinition` - Model with kind, properties and constructors
//! - `ModelRegistry` - Collection of models, loaded from YAML or built in code

use crate::types::TypeRef;
use crate::values::{ModelInstance, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Model not found in registry
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Two models registered under the same name
    #[error("Model '{0}' is defined more than once")]
    DuplicateModel(String),

    /// A property or parameter references a model that is not registered
    #[error("'{model}.{member}' references unknown model '{target}'")]
    UnknownModelReference {
        model: String,
        member: String,
        target: String,
    },
}

// ============================================================================
// Property Metadata
// ============================================================================

/// Semantic category of a string property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticKind {
    #[serde(alias = "email")]
    EmailAddress,
    #[serde(alias = "postcode")]
    PostalCode,
    #[serde(alias = "telephone_number")]
    PhoneNumber,
    Url,
}

/// Combined length range declaration.
///
/// A `maximum` of zero means "unset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLength {
    /// Maximum length (zero when unset)
    #[serde(default)]
    pub maximum: usize,

    /// Minimum length
    #[serde(default)]
    pub minimum: usize,
}

/// Constraints declared on a property.
///
/// Absence of every constraint is the common case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyConstraints {
    /// Semantic category driving specialised string generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<SemanticKind>,

    /// Minimum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Combined length range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_length: Option<StringLength>,
}

impl PropertyConstraints {
    /// Whether no constraint is declared.
    pub fn is_empty(&self) -> bool {
        self.data_type.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.string_length.is_none()
    }
}

/// A settable property of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub property_type: TypeRef,

    /// Declared constraints
    #[serde(default, skip_serializing_if = "PropertyConstraints::is_empty")]
    pub constraints: PropertyConstraints,

    /// Read-only properties are only assignable through constructors
    #[serde(default)]
    pub read_only: bool,
}

impl PropertyDescriptor {
    /// Create an unconstrained property descriptor.
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            property_type,
            constraints: PropertyConstraints::default(),
            read_only: false,
        }
    }

    /// Declare a semantic kind.
    pub fn with_data_type(mut self, kind: SemanticKind) -> Self {
        self.constraints.data_type = Some(kind);
        self
    }

    /// Declare a minimum length.
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.constraints.min_length = Some(length);
        self
    }

    /// Declare a maximum length.
    pub fn with_max_length(mut self, length: usize) -> Self {
        self.constraints.max_length = Some(length);
        self
    }

    /// Declare a combined length range.
    pub fn with_string_length(mut self, maximum: usize, minimum: usize) -> Self {
        self.constraints.string_length = Some(StringLength { maximum, minimum });
        self
    }

    /// Mark the property read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Parameter name, bound case-insensitively to a property of the same name
    pub name: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub parameter_type: TypeRef,
}

impl ParameterDefinition {
    /// Create a parameter definition.
    pub fn new(name: impl Into<String>, parameter_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }
}

/// A model constructor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDefinition {
    /// Ordered parameters
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
}

impl ConstructorDefinition {
    /// Create a constructor from its parameters.
    pub fn new(parameters: Vec<ParameterDefinition>) -> Self {
        Self { parameters }
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Whether `arguments` fit this constructor's parameter list.
    pub fn accepts(&self, arguments: &[Value]) -> bool {
        self.parameters.len() == arguments.len()
            && self
                .parameters
                .iter()
                .zip(arguments)
                .all(|(parameter, argument)| parameter.parameter_type.accepts(argument))
    }
}

// ============================================================================
// Models
// ============================================================================

/// Whether a model can be instantiated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    Concrete,
    Abstract,
    Interface,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete => f.write_str("concrete"),
            Self::Abstract => f.write_str("abstract"),
            Self::Interface => f.write_str("interface"),
        }
    }
}

/// A model type: its properties and constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Model name
    pub name: String,

    /// Concrete, abstract or interface
    #[serde(default)]
    pub kind: ModelKind,

    /// Properties in declaration order
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,

    /// Declared constructors (none means an implicit parameterless one)
    #[serde(default)]
    pub constructors: Vec<ConstructorDefinition>,
}

impl ModelDefinition {
    /// Create a concrete model with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ModelKind::Concrete,
            properties: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Set the model kind.
    pub fn with_kind(mut self, kind: ModelKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append a property.
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Append a constructor.
    pub fn with_constructor(mut self, constructor: ConstructorDefinition) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Get a property descriptor by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Get all property names.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether instances of this model can be created.
    pub fn is_instantiable(&self) -> bool {
        self.kind == ModelKind::Concrete
    }

    /// Whether a zero-argument constructor is available.
    pub fn has_parameterless_constructor(&self) -> bool {
        self.constructors.is_empty() || self.constructors.iter().any(|c| c.arity() == 0)
    }

    /// Create an instance with every property at its unset value.
    pub fn instantiate(&self) -> ModelInstance {
        self.properties
            .iter()
            .fold(ModelInstance::new(&self.name), |instance, property| {
                instance.with(&property.name, property.property_type.default_value())
            })
    }

    /// Invoke a constructor with already-built arguments.
    ///
    /// Each argument is assigned to the property whose name matches the
    /// parameter name ignoring ASCII case. Arguments without a matching
    /// property are consumed and dropped.
    pub fn invoke(
        &self,
        constructor: &ConstructorDefinition,
        arguments: Vec<Value>,
    ) -> ModelInstance {
        let mut instance = self.instantiate();
        for (parameter, argument) in constructor.parameters.iter().zip(arguments) {
            if let Some(property) = self
                .properties
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(&parameter.name))
            {
                instance.set(&property.name, argument);
            }
        }
        instance
    }
}

fn default_version() -> u32 {
    1
}

/// Registry of model definitions.
///
/// The registry is the source of truth for model structure during
/// population. It is loaded from a YAML file or assembled in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRegistry {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Model definitions
    #[serde(default)]
    pub models: Vec<ModelDefinition>,

    /// Cached model lookup (not serialized)
    #[serde(skip)]
    model_map: HashMap<String, usize>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self {
            version: default_version(),
            models: Vec::new(),
            model_map: HashMap::new(),
        }
    }
}

impl ModelRegistry {
    /// Create a registry from model definitions.
    pub fn new(models: Vec<ModelDefinition>) -> Result<Self, SchemaError> {
        let mut registry = Self {
            version: default_version(),
            models,
            model_map: HashMap::new(),
        };
        registry.build_model_map()?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a registry from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut registry: ModelRegistry = serde_yaml::from_str(yaml)?;
        registry.build_model_map()?;
        registry.validate()?;
        Ok(registry)
    }

    /// Build the internal model lookup map.
    fn build_model_map(&mut self) -> Result<(), SchemaError> {
        self.model_map.clear();
        for (idx, model) in self.models.iter().enumerate() {
            if self.model_map.insert(model.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateModel(model.name.clone()));
            }
        }
        Ok(())
    }

    /// Check that every referenced model is registered.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for model in &self.models {
            let members = model
                .properties
                .iter()
                .map(|p| (&p.name, &p.property_type))
                .chain(
                    model
                        .constructors
                        .iter()
                        .flat_map(|c| c.parameters.iter())
                        .map(|p| (&p.name, &p.parameter_type)),
                );

            for (member, member_type) in members {
                if let Some(target) = member_type.referenced_model() {
                    if !self.model_map.contains_key(target) {
                        return Err(SchemaError::UnknownModelReference {
                            model: model.name.clone(),
                            member: member.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Register a model.
    ///
    /// References to other models are checked by [`ModelRegistry::validate`],
    /// which callers registering mutually-referencing models run once all
    /// of them are in place.
    pub fn register(&mut self, model: ModelDefinition) -> Result<(), SchemaError> {
        if self.model_map.contains_key(&model.name) {
            return Err(SchemaError::DuplicateModel(model.name));
        }
        let idx = self.models.len();
        self.model_map.insert(model.name.clone(), idx);
        self.models.push(model);
        Ok(())
    }

    /// Get a model definition by name.
    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        self.model_map
            .get(name)
            .and_then(|&idx| self.models.get(idx))
    }

    /// Get a model definition by name, failing if it is not registered.
    pub fn resolve(&self, name: &str) -> Result<&ModelDefinition, SchemaError> {
        self.get(name)
            .ok_or_else(|| SchemaError::ModelNotFound(name.to_string()))
    }

    /// Get all model names.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_registry() -> ModelRegistry {
        let yaml = r#"
version: 1
models:
  - name: Person
    properties:
      - name: Name
        type: string
      - name: Email
        type: string
        constraints:
          data_type: email_address
      - name: Bio
        type: string
        constraints:
          min_length: 500
          max_length: 1000
      - name: Code
        type: string
        constraints:
          string_length:
            maximum: 50
            minimum: 45
      - name: Age
        type: int?
      - name: Id
        type: int
        read_only: true
      - name: Address
        type: Address
    constructors:
      - parameters:
          - name: id
            type: int

  - name: Address
    properties:
      - name: Street
        type: string
      - name: Neighbours
        type: list<Address>

  - name: Shape
    kind: abstract
"#;
        ModelRegistry::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_load_registry() {
        let registry = test_registry();

        assert_eq!(registry.model_names(), vec!["Person", "Address", "Shape"]);

        let person = registry.get("Person").unwrap();
        assert_eq!(person.properties.len(), 7);
        assert_eq!(
            person.property("Email").unwrap().constraints.data_type,
            Some(SemanticKind::EmailAddress)
        );
        assert_eq!(
            person.property("Code").unwrap().constraints.string_length,
            Some(StringLength {
                maximum: 50,
                minimum: 45
            })
        );
        assert!(person.property("Id").unwrap().read_only);
        assert_eq!(
            person.property("Age").unwrap().property_type,
            TypeRef::nullable(TypeRef::Int)
        );
        assert!(!person.has_parameterless_constructor());
        assert!(!registry.get("Shape").unwrap().is_instantiable());
    }

    #[test]
    fn test_semantic_kind_aliases() {
        let kind: SemanticKind = serde_yaml::from_str("email").unwrap();
        assert_eq!(kind, SemanticKind::EmailAddress);
        let kind: SemanticKind = serde_yaml::from_str("telephone_number").unwrap();
        assert_eq!(kind, SemanticKind::PhoneNumber);
    }

    #[test]
    fn test_unknown_model_reference() {
        let yaml = r#"
models:
  - name: Person
    properties:
      - name: Pets
        type: list<Pet>
"#;
        let result = ModelRegistry::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::UnknownModelReference { ref target, .. }) if target == "Pet"
        ));
    }

    #[test]
    fn test_duplicate_model() {
        let result = ModelRegistry::new(vec![
            ModelDefinition::new("Person"),
            ModelDefinition::new("Person"),
        ]);
        assert!(matches!(result, Err(SchemaError::DuplicateModel(_))));
    }

    #[test]
    fn test_instantiate_uses_unset_values() {
        let registry = test_registry();
        let instance = registry.get("Person").unwrap().instantiate();

        assert_eq!(instance.model(), "Person");
        assert_eq!(instance.get("Name"), Some(&Value::Null));
        assert_eq!(instance.get("Id"), Some(&Value::Int(0)));
        assert_eq!(instance.get("Age"), Some(&Value::Null));
        assert_eq!(instance.len(), 7);
    }

    #[test]
    fn test_invoke_binds_parameters_by_name() {
        let registry = test_registry();
        let person = registry.get("Person").unwrap();
        let constructor = &person.constructors[0];

        assert!(constructor.accepts(&[Value::Int(9)]));
        assert!(!constructor.accepts(&[Value::from("9")]));

        let instance = person.invoke(constructor, vec![Value::Int(9)]);
        assert_eq!(instance.get("Id"), Some(&Value::Int(9)));
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ModelRegistry::default();
        registry
            .register(
                ModelDefinition::new("Point")
                    .with_property(PropertyDescriptor::new("X", TypeRef::Double))
                    .with_property(PropertyDescriptor::new("Y", TypeRef::Double)),
            )
            .unwrap();

        assert!(registry.resolve("Point").is_ok());
        assert!(matches!(
            registry.resolve("Line"),
            Err(SchemaError::ModelNotFound(_))
        ));
        assert!(registry.register(ModelDefinition::new("Point")).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "models:\n  - name: Tag\n    properties:\n      - name: Label\n        type: string"
        )
        .unwrap();

        let registry = ModelRegistry::from_file(file.path()).unwrap();
        assert_eq!(registry.model_names(), vec!["Tag"]);
    }
}
