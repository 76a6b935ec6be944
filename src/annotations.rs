//! Attribute-derived conventions.
//!
//! Turns the constraints declared on a string property (semantic kind,
//! length bounds) into a generated value. Registered conventions are
//! consulted before this resolver, never by it.

use crate::config::PopulationConfiguration;
use crate::error::{PopulateError, Result};
use model_core::{PropertyDescriptor, SemanticKind, TypeRef};
use value_generator::{Randomizer, StringRequest};

/// Extra length allowed above the minimum when a range declares no maximum.
const OPEN_RANGE_SPAN: usize = 50;

/// Resolve a value from the property's declared constraints.
///
/// Returns `Ok(None)` when the type is not a string or no constraint applies.
pub fn try_resolve(
    property_type: &TypeRef,
    descriptor: Option<&PropertyDescriptor>,
    configuration: &PopulationConfiguration,
    randomizer: &mut dyn Randomizer,
) -> Result<Option<String>> {
    let Some(descriptor) = descriptor else {
        return Ok(None);
    };
    if *property_type != TypeRef::String {
        return Ok(None);
    }

    match string_directive(descriptor, configuration)? {
        Some(Directive::Semantic(kind)) => {
            tracing::debug!("Generating {kind:?} value for {}", descriptor.name);
            Ok(Some(randomizer.semantic(kind)))
        }
        Some(Directive::Bounded(request)) => Ok(Some(randomizer.string(&request))),
        None => Ok(None),
    }
}

/// What the declared constraints ask for.
#[derive(Debug, Clone, PartialEq)]
enum Directive {
    Semantic(SemanticKind),
    Bounded(StringRequest),
}

fn string_directive(
    descriptor: &PropertyDescriptor,
    configuration: &PopulationConfiguration,
) -> Result<Option<Directive>> {
    let constraints = &descriptor.constraints;

    if let Some(kind) = constraints.data_type {
        return Ok(Some(Directive::Semantic(kind)));
    }

    let declared = match (constraints.min_length, constraints.max_length) {
        (Some(minimum), Some(maximum)) => Some((minimum, maximum)),
        (None, Some(maximum)) => Some((configuration.string_min_length.min(maximum), maximum)),
        (Some(minimum), None) => Some((minimum, configuration.string_max_length.max(minimum))),
        (None, None) => None,
    };
    if let Some((minimum, maximum)) = declared {
        check_bounds(descriptor, minimum, maximum)?;
        return Ok(Some(Directive::Bounded(
            configuration.string_request(minimum, maximum),
        )));
    }

    if let Some(range) = constraints.string_length {
        let minimum = range.minimum;
        let maximum = if range.maximum == 0 {
            minimum.saturating_add(OPEN_RANGE_SPAN)
        } else {
            range.maximum
        };
        check_bounds(descriptor, minimum, maximum)?;
        return Ok(Some(Directive::Bounded(
            configuration.string_request(minimum, maximum),
        )));
    }

    Ok(None)
}

fn check_bounds(descriptor: &PropertyDescriptor, minimum: usize, maximum: usize) -> Result<()> {
    if maximum < minimum {
        return Err(PopulateError::InvalidConstraint {
            property: descriptor.name.clone(),
            minimum,
            maximum,
        });
    }
    Ok(())
}
