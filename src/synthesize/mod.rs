//! Value synthesizers, one strategy per primitive kind.
//!
//! Every synthesizer follows the same order: keep a value that is already
//! set, otherwise use a matching convention, otherwise generate a bounded
//! random value.

pub mod numeric;
pub mod string;

use crate::config::PopulationConfiguration;
use crate::error::{PopulateError, Result};
use model_core::{TypeRef, Value};
use value_generator::Randomizer;

pub use numeric::{populate_bool, populate_byte, populate_double, populate_int, populate_nullable};
pub use string::populate_string;

/// Configuration and randomness shared by the synthesizers of one build.
pub struct SynthesisContext<'a> {
    pub configuration: &'a PopulationConfiguration,
    pub randomizer: &'a mut dyn Randomizer,
}

impl<'a> SynthesisContext<'a> {
    pub fn new(
        configuration: &'a PopulationConfiguration,
        randomizer: &'a mut dyn Randomizer,
    ) -> Self {
        Self {
            configuration,
            randomizer,
        }
    }

    /// Value of the first convention matching the property, if any.
    ///
    /// Fails with `TypeMismatch` when the convention produces a value the
    /// declared type cannot hold.
    pub fn convention(&self, property_name: &str, property_type: &TypeRef) -> Result<Option<Value>> {
        let Some(value) =
            self.configuration
                .conventions
                .resolve(property_name, property_type, self.configuration)
        else {
            return Ok(None);
        };

        if !property_type.accepts(&value) {
            return Err(PopulateError::TypeMismatch {
                property: property_name.to_string(),
                expected: property_type.clone(),
                value: value.to_string(),
            });
        }

        tracing::debug!("Convention matched for {property_name} ({property_type})");
        Ok(Some(value))
    }
}

/// Keep `current` when set, else try conventions, else call `synthesize`.
pub(crate) fn populate_with<F>(
    context: &mut SynthesisContext<'_>,
    property_name: &str,
    property_type: &TypeRef,
    current: Value,
    synthesize: F,
) -> Result<Value>
where
    F: FnOnce(&mut SynthesisContext<'_>) -> Result<Value>,
{
    if !property_type.is_unset(&current) {
        return Ok(current);
    }
    if let Some(value) = context.convention(property_name, property_type)? {
        return Ok(value);
    }
    synthesize(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::{ConventionFilter, ConventionRule};
    use value_generator::RandRandomizer;

    #[test]
    fn test_convention_type_mismatch() {
        let mut configuration = PopulationConfiguration::default();
        configuration.conventions.add(ConventionRule::constant(
            ConventionFilter::Exact,
            "Count",
            TypeRef::Int,
            "forty-two",
        ));
        let mut randomizer = RandRandomizer::seeded(42);
        let context = SynthesisContext::new(&configuration, &mut randomizer);

        let err = context.convention("Count", &TypeRef::Int).unwrap_err();
        assert!(matches!(err, PopulateError::TypeMismatch { .. }));
    }

    #[test]
    fn test_populate_with_keeps_set_value() {
        let configuration = PopulationConfiguration::default();
        let mut randomizer = RandRandomizer::seeded(42);
        let mut context = SynthesisContext::new(&configuration, &mut randomizer);

        let value = populate_with(&mut context, "Age", &TypeRef::Int, Value::Int(7), |_| {
            panic!("synthesizer must not run for a set value")
        })
        .unwrap();
        assert_eq!(value, Value::Int(7));
    }
}
