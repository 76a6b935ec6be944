//! Type references for model properties.
//!
//! This module defines `TypeRef`, the type token used to describe property
//! types, constructor parameter types and build targets. Model graphs are
//! described by name (`TypeRef::Model`) and resolved through a `ModelRegistry`.

use crate::values::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Type token for a property, parameter or build target.
///
/// # Text Format
///
/// ```text
/// bool | byte | int | double | string
/// int?               nullable value kind
/// list<string>       growable sequence
/// array<int>, int[]  fixed-size sequence
/// Address            registered model
/// ```
///
/// # YAML Format
///
/// Simple types use the text format:
/// ```yaml
/// type: int?
/// type: list<Address>
/// ```
///
/// Complex types can also use object format:
/// ```yaml
/// type:
///   type: list
///   element: string
/// type:
///   type: nullable
///   inner: double
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Boolean flag
    Bool,

    /// Unsigned 8-bit integer
    Byte,

    /// 32-bit signed integer
    Int,

    /// 64-bit floating point
    Double,

    /// UTF-8 string (unset is `Value::Null`)
    String,

    /// Nullable wrapper around a value kind (`bool`, `byte`, `int`, `double`)
    Nullable(Box<TypeRef>),

    /// Growable sequence of elements
    List(Box<TypeRef>),

    /// Fixed-size sequence of elements
    Array(Box<TypeRef>),

    /// Registered model, by name
    Model(String),
}

impl TypeRef {
    /// Wrap a type as nullable.
    ///
    /// Only value kinds gain a nullable wrapper; strings, sequences and models
    /// are already nullable and are returned unchanged.
    pub fn nullable(inner: TypeRef) -> Self {
        if inner.is_value_kind() {
            Self::Nullable(Box::new(inner))
        } else {
            inner
        }
    }

    /// Create a list type.
    pub fn list(element: TypeRef) -> Self {
        Self::List(Box::new(element))
    }

    /// Create an array type.
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// Create a model reference.
    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    /// Whether this is a non-nullable value kind (zero is its unset value).
    pub fn is_value_kind(&self) -> bool {
        matches!(self, Self::Bool | Self::Byte | Self::Int | Self::Double)
    }

    /// Whether this is a list or array.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::List(_) | Self::Array(_))
    }

    /// Element type of a list or array.
    pub fn element_type(&self) -> Option<&TypeRef> {
        match self {
            Self::List(element) | Self::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Name of the referenced model, if this is a model reference.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            Self::Model(name) => Some(name),
            _ => None,
        }
    }

    /// Name of the model referenced by this type, looking through nullable
    /// and sequence wrappers.
    pub fn referenced_model(&self) -> Option<&str> {
        match self {
            Self::Model(name) => Some(name),
            Self::Nullable(inner) | Self::List(inner) | Self::Array(inner) => {
                inner.referenced_model()
            }
            _ => None,
        }
    }

    /// The unset value of this type.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Byte => Value::Byte(0),
            Self::Int => Value::Int(0),
            Self::Double => Value::Double(0.0),
            _ => Value::Null,
        }
    }

    /// Whether `value` is the unset value of this type.
    pub fn is_unset(&self, value: &Value) -> bool {
        value.is_null() || *value == self.default_value()
    }

    /// Whether `value` may be assigned to a property of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Byte, Value::Byte(_))
            | (Self::Int, Value::Int(_))
            | (Self::Double, Value::Double(_))
            | (Self::String, Value::String(_)) => true,
            (Self::Nullable(inner), value) => value.is_null() || inner.accepts(value),
            (Self::List(element) | Self::Array(element), Value::List(items)) => {
                items.iter().all(|item| element.accepts(item))
            }
            (Self::Model(name), Value::Model(instance)) => instance.model() == name,
            (Self::String | Self::List(_) | Self::Array(_) | Self::Model(_), Value::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Byte => f.write_str("byte"),
            Self::Int => f.write_str("int"),
            Self::Double => f.write_str("double"),
            Self::String => f.write_str("string"),
            Self::Nullable(inner) => write!(f, "{inner}?"),
            Self::List(element) => write!(f, "list<{element}>"),
            Self::Array(element) => write!(f, "array<{element}>"),
            Self::Model(name) => f.write_str(name),
        }
    }
}

/// Error returned when a type reference cannot be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid type reference '{input}': {reason}")]
pub struct TypeParseError {
    /// The text that failed to parse
    pub input: String,
    /// Why it failed
    pub reason: String,
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_type(input.trim()).map_err(|reason| TypeParseError {
            input: input.to_string(),
            reason,
        })
    }
}

fn parse_type(input: &str) -> Result<TypeRef, String> {
    if input.is_empty() {
        return Err("empty type reference".to_string());
    }

    if let Some(inner) = input.strip_suffix('?') {
        return Ok(TypeRef::nullable(parse_type(inner.trim())?));
    }
    if let Some(inner) = input.strip_suffix("[]") {
        return Ok(TypeRef::array(parse_type(inner.trim())?));
    }
    if let Some(inner) = generic_argument(input, "list") {
        return Ok(TypeRef::list(parse_type(inner)?));
    }
    if let Some(inner) = generic_argument(input, "array") {
        return Ok(TypeRef::array(parse_type(inner)?));
    }

    match input {
        "bool" | "boolean" => Ok(TypeRef::Bool),
        "byte" | "u8" => Ok(TypeRef::Byte),
        "int" | "i32" => Ok(TypeRef::Int),
        "double" | "f64" => Ok(TypeRef::Double),
        "string" | "text" => Ok(TypeRef::String),
        "list" | "array" => Err(format!("'{input}' requires an element type")),
        name if is_identifier(name) => Ok(TypeRef::Model(name.to_string())),
        other => Err(format!("unrecognised type '{other}'")),
    }
}

fn generic_argument<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
        .map(str::trim)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct TypeRefVisitor;

        impl<'de> Visitor<'de> for TypeRefVisitor {
            type Value = TypeRef;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or map representing a TypeRef")
            }

            // Handle string format: "int", "list<string>", "Address"
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                value.parse().map_err(E::custom)
            }

            // Handle map format: {"type": "list", "element": "string"}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                match type_name.as_str() {
                    "nullable" => {
                        let inner: TypeRef = get_field_required(&fields, "inner")?;
                        Ok(TypeRef::nullable(inner))
                    }
                    "list" => {
                        let element: TypeRef = get_element(&fields)?;
                        Ok(TypeRef::list(element))
                    }
                    "array" => {
                        let element: TypeRef = get_element(&fields)?;
                        Ok(TypeRef::array(element))
                    }
                    "model" => {
                        let name: String = get_field_required(&fields, "name")?;
                        Ok(TypeRef::Model(name))
                    }
                    other => other.parse().map_err(M::Error::custom),
                }
            }
        }

        deserializer.deserialize_any(TypeRefVisitor)
    }
}

// Helper functions for deserialization
fn get_element<E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
) -> Result<TypeRef, E> {
    if fields.contains_key("element_type") {
        get_field_required(fields, "element_type")
    } else {
        get_field_required(fields, "element")
    }
}

fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}
