//! Value representations for populated model graphs.
//!
//! `Value` is the dynamic value stored in a property slot and `ModelInstance`
//! is the object under construction. Both serialize to plain JSON-shaped data
//! so a finished graph can be handed to serde.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Dynamic property value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Unset reference, empty nullable, or depth-limited nested model
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Unsigned byte
    Byte(u8),

    /// 32-bit signed integer
    Int(i32),

    /// 64-bit floating point
    Double(f64),

    /// String value
    String(String),

    /// List or array elements
    List(Vec<Value>),

    /// Nested model instance
    Model(ModelInstance),
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a byte.
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Self::Byte(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a nested model.
    pub fn as_model(&self) -> Option<&ModelInstance> {
        match self {
            Self::Model(instance) => Some(instance),
            _ => None,
        }
    }

    /// Try to get this value as a mutable nested model.
    pub fn as_model_mut(&mut self) -> Option<&mut ModelInstance> {
        match self {
            Self::Model(instance) => Some(instance),
            _ => None,
        }
    }

    /// Consume this value, returning the nested model if it is one.
    pub fn into_model(self) -> Option<ModelInstance> {
        match self {
            Self::Model(instance) => Some(instance),
            _ => None,
        }
    }

    /// Follow a dotted property path (`"Address.City"`) through nested models.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self, |value, segment| value.as_model()?.get(segment))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Byte(b) => write!(f, "{b}u8"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => write!(f, "[{} items]", items.len()),
            Self::Model(instance) => write!(f, "<{}>", instance.model()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::Byte(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<ModelInstance> for Value {
    fn from(value: ModelInstance) -> Self {
        Self::Model(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An instance of a registered model.
///
/// Properties are kept in declaration order so that population, overrides
/// and serialization all see the same ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    model: String,
    properties: Vec<(String, Value)>,
}

impl ModelInstance {
    /// Create an empty instance of the named model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            properties: Vec::new(),
        }
    }

    /// Builder-style property assignment.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value.into());
        self
    }

    /// Name of the model this instance belongs to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get a property value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Get a mutable property value by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.properties
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Set a property, returning the previous value if it existed.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        match self.get_mut(&name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.properties.push((name, value));
                None
            }
        }
    }

    /// Take a property value out of its slot, leaving `Value::Null` behind.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.get_mut(name).map(std::mem::take)
    }

    /// Whether the instance has a slot for the named property.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of property slots.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the instance has no property slots.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for ModelInstance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
