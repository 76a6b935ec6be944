//! Convention registry.
//!
//! A convention maps a property-name pattern and a declared type to a value
//! factory. Rules are evaluated in registration order and the first match
//! wins, overriding every other source of values for an unset property.

use crate::config::PopulationConfiguration;
use model_core::{TypeRef, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How a rule's pattern is matched against a property name.
///
/// Matching ignores ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConventionFilter {
    Exact,
    StartsWith,
    EndsWith,
    Contains,
}

impl ConventionFilter {
    /// Whether `property_name` matches `pattern` under this filter.
    pub fn matches(self, pattern: &str, property_name: &str) -> bool {
        let name = property_name.to_ascii_lowercase();
        let pattern = pattern.to_ascii_lowercase();
        match self {
            Self::Exact => name == pattern,
            Self::StartsWith => name.starts_with(&pattern),
            Self::EndsWith => name.ends_with(&pattern),
            Self::Contains => name.contains(&pattern),
        }
    }
}

/// Value factory invoked with the active configuration.
pub type ConventionFactory = Arc<dyn Fn(&PopulationConfiguration) -> Value + Send + Sync>;

/// A single filter → result rule.
#[derive(Clone)]
pub struct ConventionRule {
    filter: ConventionFilter,
    pattern: String,
    target: TypeRef,
    factory: ConventionFactory,
}

impl ConventionRule {
    /// Create a rule producing values from `factory`.
    pub fn new<F>(
        filter: ConventionFilter,
        pattern: impl Into<String>,
        target: TypeRef,
        factory: F,
    ) -> Self
    where
        F: Fn(&PopulationConfiguration) -> Value + Send + Sync + 'static,
    {
        Self {
            filter,
            pattern: pattern.into(),
            target,
            factory: Arc::new(factory),
        }
    }

    /// Create a rule that always produces `value`.
    pub fn constant(
        filter: ConventionFilter,
        pattern: impl Into<String>,
        target: TypeRef,
        value: impl Into<Value>,
    ) -> Self {
        let value = value.into();
        Self::new(filter, pattern, target, move |_| value.clone())
    }

    pub fn filter(&self) -> ConventionFilter {
        self.filter
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    /// Whether this rule applies to a property.
    pub fn matches(&self, property_name: &str, property_type: &TypeRef) -> bool {
        self.target == *property_type && self.filter.matches(&self.pattern, property_name)
    }

    /// Invoke the rule's factory.
    pub fn produce(&self, configuration: &PopulationConfiguration) -> Value {
        (self.factory)(configuration)
    }
}

impl fmt::Debug for ConventionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConventionRule")
            .field("filter", &self.filter)
            .field("pattern", &self.pattern)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of convention rules.
///
/// Mutate only between builds; a population pass reads the rules.
#[derive(Debug, Clone, Default)]
pub struct Conventions {
    rules: Vec<ConventionRule>,
}

impl Conventions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn add(&mut self, rule: ConventionRule) {
        self.rules.push(rule);
    }

    /// Append several rules, preserving their order.
    pub fn add_many(&mut self, rules: impl IntoIterator<Item = ConventionRule>) {
        self.rules.extend(rules);
    }

    /// Remove the first rule registered with exactly this pattern and type.
    ///
    /// Returns whether a rule was removed.
    pub fn remove(&mut self, pattern: &str, target: &TypeRef) -> bool {
        match self
            .rules
            .iter()
            .position(|rule| rule.pattern == pattern && rule.target == *target)
        {
            Some(idx) => {
                self.rules.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// First rule matching the property, in registration order.
    pub fn find(&self, property_name: &str, property_type: &TypeRef) -> Option<&ConventionRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(property_name, property_type))
    }

    /// Whether any rule matches the property.
    pub fn matches(&self, property_name: &str, property_type: &TypeRef) -> bool {
        self.find(property_name, property_type).is_some()
    }

    /// Value of the first matching rule, or `None` when nothing matches.
    pub fn resolve(
        &self,
        property_name: &str,
        property_type: &TypeRef,
        configuration: &PopulationConfiguration,
    ) -> Option<Value> {
        self.find(property_name, property_type)
            .map(|rule| rule.produce(configuration))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConventionRule> {
        self.rules.iter()
    }
}

impl FromIterator<ConventionRule> for Conventions {
    fn from_iter<I: IntoIterator<Item = ConventionRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
