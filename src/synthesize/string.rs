//! String synthesizer.

use super::{populate_with, SynthesisContext};
use crate::annotations;
use crate::error::Result;
use model_core::{PropertyDescriptor, TypeRef, Value};

/// Populate a string property.
///
/// Declared constraints are consulted after conventions and before the
/// configured default length bounds.
pub fn populate_string(
    context: &mut SynthesisContext<'_>,
    property_name: &str,
    current: Value,
    descriptor: Option<&PropertyDescriptor>,
) -> Result<Value> {
    populate_with(context, property_name, &TypeRef::String, current, |context| {
        let configuration = context.configuration;
        let generated = match annotations::try_resolve(
            &TypeRef::String,
            descriptor,
            configuration,
            &mut *context.randomizer,
        )? {
            Some(value) => value,
            None => context
                .randomizer
                .string(&configuration.default_string_request()),
        };
        Ok(Value::String(generated))
    })
}
