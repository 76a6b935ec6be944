//! Population configuration.
//!
//! A configuration is built once per builder and passed by reference through
//! every population call. It can be assembled in code or loaded from YAML:
//!
//! ```yaml
//! population:
//!   default_collection_item_count: 3
//!   max_depth: 4
//!   int_minimum: 1
//!   int_maximum: 99
//!   default_string_casing: proper_case
//! conventions:
//!   - filter: exact
//!     pattern: Count
//!     type: int
//!     value: 42
//! ```

use crate::conventions::{ConventionFilter, ConventionRule, Conventions};
use crate::error::{PopulateError, Result};
use model_core::{ModelInstance, TypeRef, Value};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::path::Path;
use value_generator::{Casing, CharacterSet, Language, Spaces, StringRequest};

/// Settings consulted by every synthesizer during one build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfiguration {
    /// Number of elements generated for every sequence
    pub default_collection_item_count: usize,

    /// Deepest nesting level the walker will descend into
    pub max_depth: usize,

    pub int_minimum: i32,
    pub int_maximum: i32,

    pub double_minimum: f64,
    pub double_maximum: f64,

    /// Default string length bounds (inclusive, in characters)
    pub string_min_length: usize,
    pub string_max_length: usize,

    pub default_string_character_set: CharacterSet,
    pub default_string_spaces: Spaces,
    pub default_string_casing: Casing,
    pub default_language: Language,

    /// Live convention rules
    #[serde(skip)]
    pub conventions: Conventions,
}

impl Default for PopulationConfiguration {
    fn default() -> Self {
        Self {
            default_collection_item_count: 2,
            max_depth: 10,
            int_minimum: 1,
            int_maximum: 1000,
            double_minimum: 1.0,
            double_maximum: 1000.0,
            string_min_length: 5,
            string_max_length: 20,
            default_string_character_set: CharacterSet::AlphaNumeric,
            default_string_spaces: Spaces::None,
            default_string_casing: Casing::Any,
            default_language: Language::English,
            conventions: Conventions::default(),
        }
    }
}

impl PopulationConfiguration {
    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: ConfigurationFile = serde_yaml::from_str(yaml)?;
        let mut configuration = file.population;
        for entry in file.conventions {
            configuration.conventions.add(entry.into_rule()?);
        }
        configuration.validate()?;
        Ok(configuration)
    }

    /// Check that every bound pair is ordered.
    pub fn validate(&self) -> Result<()> {
        if self.int_minimum > self.int_maximum {
            return Err(PopulateError::InvalidConfiguration(format!(
                "int_minimum ({}) is greater than int_maximum ({})",
                self.int_minimum, self.int_maximum
            )));
        }
        if !self.double_minimum.is_finite() || !self.double_maximum.is_finite() {
            return Err(PopulateError::InvalidConfiguration(format!(
                "double bounds must be finite, got {} and {}",
                self.double_minimum, self.double_maximum
            )));
        }
        if !(self.double_maximum - self.double_minimum).is_finite() {
            return Err(PopulateError::InvalidConfiguration(format!(
                "the span between double_minimum ({}) and double_maximum ({}) overflows",
                self.double_minimum, self.double_maximum
            )));
        }
        if self.double_minimum > self.double_maximum {
            return Err(PopulateError::InvalidConfiguration(format!(
                "double_minimum ({}) is greater than double_maximum ({})",
                self.double_minimum, self.double_maximum
            )));
        }
        if self.string_min_length > self.string_max_length {
            return Err(PopulateError::InvalidConfiguration(format!(
                "string_min_length ({}) is greater than string_max_length ({})",
                self.string_min_length, self.string_max_length
            )));
        }
        Ok(())
    }

    /// A string request with the given bounds and the configured defaults.
    pub fn string_request(&self, min_length: usize, max_length: usize) -> StringRequest {
        StringRequest::new(min_length, max_length)
            .with_character_set(self.default_string_character_set)
            .with_spaces(self.default_string_spaces)
            .with_casing(self.default_string_casing)
            .with_language(self.default_language)
    }

    /// The request used for strings without any declared constraint.
    pub fn default_string_request(&self) -> StringRequest {
        self.string_request(self.string_min_length, self.string_max_length)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigurationFile {
    #[serde(default)]
    population: PopulationConfiguration,
    #[serde(default)]
    conventions: Vec<ConventionEntry>,
}

/// A constant convention as written in a configuration file.
#[derive(Debug, Deserialize)]
struct ConventionEntry {
    filter: ConventionFilter,
    pattern: String,
    #[serde(rename = "type")]
    target: TypeRef,
    #[serde(default)]
    value: YamlValue,
}

impl ConventionEntry {
    fn into_rule(self) -> Result<ConventionRule> {
        let value = yaml_to_value(&self.value, &self.target).ok_or_else(|| {
            PopulateError::InvalidConfiguration(format!(
                "convention '{}': value {:?} is not a valid {}",
                self.pattern, self.value, self.target
            ))
        })?;
        Ok(ConventionRule::constant(
            self.filter,
            self.pattern,
            self.target,
            value,
        ))
    }
}

/// Convert a YAML value into a `Value` of the given type.
///
/// Returns `None` when the YAML value cannot represent that type.
pub fn yaml_to_value(yaml: &YamlValue, target: &TypeRef) -> Option<Value> {
    if let YamlValue::Tagged(tagged) = yaml {
        return yaml_to_value(&tagged.value, target);
    }
    match (target, yaml) {
        (TypeRef::Nullable(_), YamlValue::Null) => Some(Value::Null),
        (TypeRef::Nullable(inner), yaml) => yaml_to_value(yaml, inner),
        (TypeRef::Bool, YamlValue::Bool(b)) => Some(Value::Bool(*b)),
        (TypeRef::Byte, YamlValue::Number(n)) => {
            n.as_u64().and_then(|n| u8::try_from(n).ok()).map(Value::Byte)
        }
        (TypeRef::Int, YamlValue::Number(n)) => {
            n.as_i64().and_then(|n| i32::try_from(n).ok()).map(Value::Int)
        }
        (TypeRef::Double, YamlValue::Number(n)) => n.as_f64().map(Value::Double),
        (TypeRef::String, YamlValue::String(s)) => Some(Value::String(s.clone())),
        (TypeRef::String, YamlValue::Number(n)) => Some(Value::String(n.to_string())),
        (TypeRef::String | TypeRef::List(_) | TypeRef::Array(_) | TypeRef::Model(_), YamlValue::Null) => {
            Some(Value::Null)
        }
        (TypeRef::List(element) | TypeRef::Array(element), YamlValue::Sequence(items)) => items
            .iter()
            .map(|item| yaml_to_value(item, element))
            .collect::<Option<Vec<_>>>()
            .map(Value::List),
        (TypeRef::Model(name), YamlValue::Mapping(map)) => {
            let mut instance = ModelInstance::new(name);
            for (key, value) in map {
                let key = key.as_str()?;
                instance.set(key, infer_value(value));
            }
            Some(Value::Model(instance))
        }
        _ => None,
    }
}

/// Convert a YAML value without a declared type.
fn infer_value(yaml: &YamlValue) -> Value {
    match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64().and_then(|i| i32::try_from(i).ok()) {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Double(f)
            } else {
                Value::String(n.to_string())
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => Value::List(items.iter().map(infer_value).collect()),
        YamlValue::Mapping(map) => {
            let mut instance = ModelInstance::new("");
            for (key, value) in map {
                if let Some(key) = key.as_str() {
                    instance.set(key, infer_value(value));
                }
            }
            Value::Model(instance)
        }
        YamlValue::Tagged(tagged) => infer_value(&tagged.value),
    }
}
