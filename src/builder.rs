//! Fluent builder façade.
//!
//! [`AutoBuilder`] holds the configuration stage (conventions, bounds,
//! randomness). [`AutoBuilder::construct`] creates and populates the target
//! and hands back a [`PopulatedBuilder`] for post-build overrides.
//!
//! ```
//! use graphfill::AutoBuilder;
//! use model_core::{ModelRegistry, Value};
//!
//! let registry = ModelRegistry::from_yaml(r#"
//! models:
//!   - name: Person
//!     properties:
//!       - name: Name
//!         type: string
//!       - name: Age
//!         type: int
//! "#).unwrap();
//!
//! let mut builder = AutoBuilder::for_model(&registry, "Person").with_seed(7);
//! let person = builder
//!     .construct()
//!     .unwrap()
//!     .with("Name", "Ada")
//!     .unwrap()
//!     .with_int_range("Age", 30, 40)
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(person.pointer("Name"), Some(&Value::from("Ada")));
//! ```

use crate::config::PopulationConfiguration;
use crate::conventions::ConventionRule;
use crate::error::{PopulateError, Result};
use crate::overrides::{apply_override, IntoOverridePath};
use crate::populate::PopulationService;
use model_core::{ModelRegistry, SemanticKind, TypeRef, Value};
use rand::Rng;
use serde::de::DeserializeOwned;
use value_generator::{RandRandomizer, Randomizer, StringRequest};

/// A value to generate for an override.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRequest {
    /// Semantic string (email, postal code, phone number, URL)
    Semantic(SemanticKind),
    /// Bounded random string
    String(StringRequest),
    /// Integer in `[min, max]`
    Integer { min: i32, max: i32 },
    /// Double in `[min, max]`
    Double { min: f64, max: f64 },
}

impl ValueRequest {
    /// Draw a value from `randomizer`.
    pub fn generate(&self, randomizer: &mut dyn Randomizer) -> Value {
        match self {
            Self::Semantic(kind) => Value::String(randomizer.semantic(*kind)),
            Self::String(request) => Value::String(randomizer.string(request)),
            Self::Integer { min, max } => Value::Int(randomizer.integer(*min, *max)),
            Self::Double { min, max } => Value::Double(randomizer.double(*min, *max)),
        }
    }
}

/// Configuration stage of a build.
pub struct AutoBuilder<'r> {
    registry: &'r ModelRegistry,
    target: TypeRef,
    configuration: PopulationConfiguration,
    randomizer: Box<dyn Randomizer>,
}

impl<'r> AutoBuilder<'r> {
    /// Builder for any target type.
    pub fn new(registry: &'r ModelRegistry, target: TypeRef) -> Self {
        Self {
            registry,
            target,
            configuration: PopulationConfiguration::default(),
            randomizer: Box::new(RandRandomizer::new()),
        }
    }

    /// Builder for a registered model.
    pub fn for_model(registry: &'r ModelRegistry, model: &str) -> Self {
        Self::new(registry, TypeRef::model(model))
    }

    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    pub fn configuration(&self) -> &PopulationConfiguration {
        &self.configuration
    }

    /// Replace the whole configuration, conventions included.
    pub fn with_configuration(mut self, configuration: PopulationConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Adjust the configuration in place.
    pub fn configure<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut PopulationConfiguration),
    {
        configure(&mut self.configuration);
        self
    }

    /// Use a custom source of random values.
    pub fn with_randomizer<R: Randomizer + 'static>(mut self, randomizer: R) -> Self {
        self.randomizer = Box::new(randomizer);
        self
    }

    /// Use a deterministic randomizer.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_randomizer(RandRandomizer::seeded(seed))
    }

    /// Draw random values from an existing `rand` generator.
    pub fn with_rng<R: Rng + 'static>(self, rng: R) -> Self {
        self.with_randomizer(RandRandomizer::from_rng(rng))
    }

    pub fn clear_conventions(mut self) -> Self {
        self.configuration.conventions.clear();
        self
    }

    /// Remove the first convention registered for `pattern` and `target`.
    pub fn clear_convention(mut self, pattern: &str, target: &TypeRef) -> Self {
        self.configuration.conventions.remove(pattern, target);
        self
    }

    pub fn add_convention(mut self, rule: ConventionRule) -> Self {
        self.configuration.conventions.add(rule);
        self
    }

    pub fn add_conventions(mut self, rules: impl IntoIterator<Item = ConventionRule>) -> Self {
        self.configuration.conventions.add_many(rules);
        self
    }

    /// Construct and populate the target.
    pub fn construct(&mut self) -> Result<PopulatedBuilder<'_>> {
        self.construct_with(Vec::new())
    }

    /// Construct the target from explicit constructor arguments, then
    /// populate it.
    ///
    /// Models are populated at depth 1. Array targets are created with the
    /// configured item count of unset elements and are not populated; list
    /// targets are filled by the list strategy.
    pub fn construct_with(&mut self, arguments: Vec<Value>) -> Result<PopulatedBuilder<'_>> {
        self.configuration.validate()?;

        let mut service =
            PopulationService::new(self.registry, &self.configuration, &mut *self.randomizer);

        let entity = match &self.target {
            TypeRef::Model(model) => {
                let mut instance = if arguments.is_empty() {
                    service.construct(model, 1)?
                } else {
                    service.construct_with(model, arguments)?
                };
                service.populate_properties(&mut instance, 1)?;
                Value::Model(instance)
            }
            TypeRef::Array(element) if arguments.is_empty() => Value::List(vec![
                element.default_value();
                self.configuration.default_collection_item_count
            ]),
            TypeRef::List(_) if arguments.is_empty() => {
                service.populate_property(1, "", &self.target, Value::Null, None)?
            }
            TypeRef::Array(_) | TypeRef::List(_) => {
                return Err(PopulateError::NoMatchingConstructor {
                    model: self.target.to_string(),
                    arguments: arguments.len(),
                })
            }
            other => {
                return Err(PopulateError::unsupported(
                    other.to_string(),
                    "only models and sequences can be built",
                ))
            }
        };

        tracing::debug!("Constructed {}", self.target);
        Ok(PopulatedBuilder {
            registry: self.registry,
            configuration: &self.configuration,
            randomizer: &mut *self.randomizer,
            entity,
        })
    }
}

/// A constructed, populated entity awaiting overrides.
pub struct PopulatedBuilder<'b> {
    registry: &'b ModelRegistry,
    configuration: &'b PopulationConfiguration,
    randomizer: &'b mut dyn Randomizer,
    entity: Value,
}

impl<'b> PopulatedBuilder<'b> {
    /// Assign a value to the property at `path`.
    pub fn with(mut self, path: impl IntoOverridePath, value: impl Into<Value>) -> Result<Self> {
        let path = path.into_override_path()?;
        apply_override(self.registry, &mut self.entity, &path, value.into())?;
        Ok(self)
    }

    /// Assign a freshly generated value to the property at `path`.
    pub fn with_generated(mut self, path: impl IntoOverridePath, request: ValueRequest) -> Result<Self> {
        let path = path.into_override_path()?;
        let value = request.generate(&mut *self.randomizer);
        apply_override(self.registry, &mut self.entity, &path, value)?;
        Ok(self)
    }

    pub fn with_semantic(self, path: impl IntoOverridePath, kind: SemanticKind) -> Result<Self> {
        self.with_generated(path, ValueRequest::Semantic(kind))
    }

    /// Random string of `[min_length, max_length]` characters using the
    /// configured character set, spacing, casing and language.
    pub fn with_string_length(
        self,
        path: impl IntoOverridePath,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self> {
        let request = self.configuration.string_request(min_length, max_length);
        self.with_generated(path, ValueRequest::String(request))
    }

    pub fn with_string(self, path: impl IntoOverridePath, request: StringRequest) -> Result<Self> {
        self.with_generated(path, ValueRequest::String(request))
    }

    pub fn with_int_range(self, path: impl IntoOverridePath, min: i32, max: i32) -> Result<Self> {
        self.with_generated(path, ValueRequest::Integer { min, max })
    }

    pub fn with_double_range(self, path: impl IntoOverridePath, min: f64, max: f64) -> Result<Self> {
        self.with_generated(path, ValueRequest::Double { min, max })
    }

    /// Mutate the entity directly.
    pub fn modify<F>(mut self, modify: F) -> Self
    where
        F: FnOnce(&mut Value),
    {
        modify(&mut self.entity);
        self
    }

    /// Apply `then` only when `predicate` holds for the current entity.
    pub fn when<P, F>(self, predicate: P, then: F) -> Result<Self>
    where
        P: FnOnce(&Value) -> bool,
        F: FnOnce(Self) -> Result<Self>,
    {
        if predicate(&self.entity) {
            then(self)
        } else {
            Ok(self)
        }
    }

    pub fn entity(&self) -> &Value {
        &self.entity
    }

    /// Finish the build.
    pub fn build(self) -> Value {
        self.entity
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entity)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entity)?)
    }

    /// Finish the build and deserialize the entity into `T`.
    pub fn build_into<T: DeserializeOwned>(self) -> Result<T> {
        let json = serde_json::to_value(&self.entity)?;
        Ok(serde_json::from_value(json)?)
    }
}
