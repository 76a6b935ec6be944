//! Property graph walker.
//!
//! Precedence for every settable property, most specific first:
//!
//! 1. a value already present on the instance
//! 2. a matching convention
//! 3. constraints declared on the property (strings only)
//! 4. bounded random synthesis
//!
//! Nested models are constructed and walked at `depth + 1`. Once `depth`
//! reaches the configured maximum, nested model properties are left unset so
//! that self-referencing graphs terminate.

use crate::config::PopulationConfiguration;
use crate::error::{PopulateError, Result};
use crate::list::ListPopulator;
use crate::synthesize::{self, SynthesisContext};
use model_core::{ModelDefinition, ModelInstance, ModelRegistry, PropertyDescriptor, TypeRef, Value};
use value_generator::Randomizer;

/// Populates model instances against a registry.
pub struct PopulationService<'a> {
    registry: &'a ModelRegistry,
    configuration: &'a PopulationConfiguration,
    randomizer: &'a mut dyn Randomizer,
}

impl<'a> PopulationService<'a> {
    pub fn new(
        registry: &'a ModelRegistry,
        configuration: &'a PopulationConfiguration,
        randomizer: &'a mut dyn Randomizer,
    ) -> Self {
        Self {
            registry,
            configuration,
            randomizer,
        }
    }

    pub fn configuration(&self) -> &PopulationConfiguration {
        self.configuration
    }

    fn context(&mut self) -> SynthesisContext<'_> {
        SynthesisContext::new(self.configuration, &mut *self.randomizer)
    }

    /// Populate every settable property of `instance` in declaration order.
    ///
    /// Read-only properties are skipped.
    pub fn populate_properties(&mut self, instance: &mut ModelInstance, depth: usize) -> Result<()> {
        let registry = self.registry;
        let model = registry.resolve(instance.model())?;

        for property in model.properties.iter().filter(|p| !p.read_only) {
            let current = instance
                .take(&property.name)
                .unwrap_or_else(|| property.property_type.default_value());
            let value = self.populate_property(
                depth,
                &property.name,
                &property.property_type,
                current,
                Some(property),
            )?;
            instance.set(&property.name, value);
        }

        Ok(())
    }

    /// Populate a single property value.
    pub fn populate_property(
        &mut self,
        depth: usize,
        property_name: &str,
        property_type: &TypeRef,
        current: Value,
        descriptor: Option<&PropertyDescriptor>,
    ) -> Result<Value> {
        match property_type {
            TypeRef::Bool => synthesize::populate_bool(&mut self.context(), property_name, current),
            TypeRef::Byte => synthesize::populate_byte(&mut self.context(), property_name, current),
            TypeRef::Int => synthesize::populate_int(&mut self.context(), property_name, current),
            TypeRef::Double => {
                synthesize::populate_double(&mut self.context(), property_name, current)
            }
            TypeRef::Nullable(inner) if inner.is_value_kind() => {
                synthesize::populate_nullable(&mut self.context(), property_name, inner, current)
            }
            // Reference kinds are already nullable
            TypeRef::Nullable(inner) => {
                self.populate_property(depth, property_name, inner, current, descriptor)
            }
            TypeRef::String => {
                synthesize::populate_string(&mut self.context(), property_name, current, descriptor)
            }
            TypeRef::List(element) | TypeRef::Array(element) => self.populate_sequence(
                depth,
                property_name,
                property_type,
                element,
                current,
                descriptor,
            ),
            TypeRef::Model(model) => {
                self.populate_model(depth, property_name, property_type, model, current)
            }
        }
    }

    /// Fill a sequence through the list strategy.
    ///
    /// A supplied sequence is cleared and refilled in place to the configured
    /// item count. Conventions only apply when the sequence is `null` or empty.
    fn populate_sequence(
        &mut self,
        depth: usize,
        property_name: &str,
        sequence_type: &TypeRef,
        element_type: &TypeRef,
        current: Value,
        descriptor: Option<&PropertyDescriptor>,
    ) -> Result<Value> {
        let existing = match current {
            Value::Null => None,
            Value::List(items) => Some(items),
            other => return Err(mismatch(property_name, sequence_type, &other)),
        };

        if existing.as_ref().map_or(true, Vec::is_empty) {
            if let Some(value) = self.context().convention(property_name, sequence_type)? {
                return Ok(value);
            }
        }

        let populator = ListPopulator::new(self.configuration.default_collection_item_count);
        let items = populator.populate(
            property_name,
            element_type,
            existing,
            depth,
            descriptor,
            |depth, name, element, current, descriptor| {
                self.populate_property(depth + 1, name, element, current, descriptor)
            },
        )?;
        Ok(Value::List(items))
    }

    fn populate_model(
        &mut self,
        depth: usize,
        property_name: &str,
        property_type: &TypeRef,
        model_name: &str,
        current: Value,
    ) -> Result<Value> {
        if current.is_null() {
            if let Some(value) = self.context().convention(property_name, property_type)? {
                return Ok(value);
            }
        }

        if depth >= self.configuration.max_depth {
            tracing::debug!(
                "Maximum depth {} reached at {property_name}, not descending into {model_name}",
                self.configuration.max_depth
            );
            return Ok(current);
        }

        let mut instance = match current {
            Value::Null => self.construct(model_name, depth + 1)?,
            Value::Model(instance) if instance.model() == model_name => instance,
            other => return Err(mismatch(property_name, property_type, &other)),
        };
        self.populate_properties(&mut instance, depth + 1)?;
        Ok(Value::Model(instance))
    }

    /// Create an instance of `model_name` without explicit arguments.
    ///
    /// Uses the parameterless constructor when one exists; otherwise the
    /// first declared constructor is invoked with synthesized arguments,
    /// each populated as a property at `depth`.
    pub fn construct(&mut self, model_name: &str, depth: usize) -> Result<ModelInstance> {
        let registry = self.registry;
        let model = instantiable(registry, model_name)?;

        if model.has_parameterless_constructor() {
            return Ok(model.instantiate());
        }
        let Some(constructor) = model.constructors.first() else {
            return Ok(model.instantiate());
        };

        tracing::debug!(
            "Synthesizing {} constructor argument(s) for {model_name}",
            constructor.arity()
        );
        let arguments = constructor
            .parameters
            .iter()
            .map(|parameter| {
                self.populate_property(
                    depth,
                    &parameter.name,
                    &parameter.parameter_type,
                    parameter.parameter_type.default_value(),
                    None,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(model.invoke(constructor, arguments))
    }

    /// Create an instance of `model_name` from caller-supplied arguments.
    ///
    /// The first declared constructor whose parameters accept the arguments
    /// is used.
    pub fn construct_with(&self, model_name: &str, arguments: Vec<Value>) -> Result<ModelInstance> {
        let model = instantiable(self.registry, model_name)?;

        if arguments.is_empty() && model.has_parameterless_constructor() {
            return Ok(model.instantiate());
        }

        let constructor = model
            .constructors
            .iter()
            .find(|constructor| constructor.accepts(&arguments))
            .ok_or_else(|| PopulateError::NoMatchingConstructor {
                model: model_name.to_string(),
                arguments: arguments.len(),
            })?;

        tracing::debug!(
            "Invoking {model_name} constructor with {} explicit argument(s)",
            arguments.len()
        );
        Ok(model.invoke(constructor, arguments))
    }
}

fn instantiable<'r>(registry: &'r ModelRegistry, model_name: &str) -> Result<&'r ModelDefinition> {
    let model = registry.resolve(model_name)?;
    if !model.is_instantiable() {
        return Err(PopulateError::unsupported(
            model_name,
            format!("{} models cannot be instantiated", model.kind),
        ));
    }
    Ok(model)
}

fn mismatch(property_name: &str, expected: &TypeRef, value: &Value) -> PopulateError {
    PopulateError::TypeMismatch {
        property: property_name.to_string(),
        expected: expected.clone(),
        value: value.to_string(),
    }
}
