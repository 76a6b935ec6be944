//! Synthesizers for the value kinds and their nullable variants.

use super::{populate_with, SynthesisContext};
use crate::error::{PopulateError, Result};
use model_core::{TypeRef, Value};

/// Bytes are drawn from this range, inclusive.
const BYTE_RANGE: (i32, i32) = (1, 255);

pub fn populate_bool(
    context: &mut SynthesisContext<'_>,
    property_name: &str,
    current: Value,
) -> Result<Value> {
    populate_with(context, property_name, &TypeRef::Bool, current, |context| {
        fresh_value(context, &TypeRef::Bool)
    })
}

pub fn populate_byte(
    context: &mut SynthesisContext<'_>,
    property_name: &str,
    current: Value,
) -> Result<Value> {
    populate_with(context, property_name, &TypeRef::Byte, current, |context| {
        fresh_value(context, &TypeRef::Byte)
    })
}

pub fn populate_int(
    context: &mut SynthesisContext<'_>,
    property_name: &str,
    current: Value,
) -> Result<Value> {
    populate_with(context, property_name, &TypeRef::Int, current, |context| {
        fresh_value(context, &TypeRef::Int)
    })
}

pub fn populate_double(
    context: &mut SynthesisContext<'_>,
    property_name: &str,
    current: Value,
) -> Result<Value> {
    populate_with(context, property_name, &TypeRef::Double, current, |context| {
        fresh_value(context, &TypeRef::Double)
    })
}

/// Populate a nullable value kind.
///
/// Only `Null` counts as unset, so an explicit zero survives. Conventions
/// must target the nullable type itself.
pub fn populate_nullable(
    context: &mut SynthesisContext<'_>,
    property_name: &str,
    inner: &TypeRef,
    current: Value,
) -> Result<Value> {
    let nullable = TypeRef::nullable(inner.clone());
    populate_with(context, property_name, &nullable, current, |context| {
        fresh_value(context, inner)
    })
}

fn fresh_value(context: &mut SynthesisContext<'_>, value_type: &TypeRef) -> Result<Value> {
    let configuration = context.configuration;
    let randomizer = &mut *context.randomizer;
    let value = match value_type {
        TypeRef::Bool => Value::Bool(randomizer.boolean()),
        TypeRef::Byte => {
            let byte = randomizer.integer(BYTE_RANGE.0, BYTE_RANGE.1);
            Value::Byte(u8::try_from(byte).unwrap_or(u8::MAX))
        }
        TypeRef::Int => Value::Int(
            randomizer.integer(configuration.int_minimum, configuration.int_maximum),
        ),
        TypeRef::Double => Value::Double(
            randomizer.double(configuration.double_minimum, configuration.double_maximum),
        ),
        other => {
            return Err(PopulateError::unsupported(
                other.to_string(),
                "not a numeric or boolean type",
            ))
        }
    };
    Ok(value)
}
