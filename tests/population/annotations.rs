//! Declared-constraint scenarios on `TestAnnotationModel`.

use crate::{registry, SEED};
use graphfill::{AutoBuilder, ConventionFilter, ConventionRule, PopulateError};
use model_core::{ModelRegistry, TypeRef, Value};

fn builder(registry: &ModelRegistry) -> AutoBuilder<'_> {
    AutoBuilder::for_model(registry, "TestAnnotationModel").with_seed(SEED)
}

fn text<'v>(model: &'v Value, property: &str) -> &'v str {
    model
        .pointer(property)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("{property} should be a string"))
}

fn length(model: &Value, property: &str) -> usize {
    text(model, property).chars().count()
}

#[test]
fn test_semantic_kinds() {
    let registry = registry();
    let mut builder = builder(&registry);

    for _ in 0..20 {
        let model = builder.construct().unwrap().build();

        let email = text(&model, "Email");
        let (local, domain) = email.split_once('@').unwrap();
        assert!(!local.is_empty());
        assert!(domain.contains('.'));

        let postcode = text(&model, "PostCode");
        assert!(postcode.contains(' '), "postcode {postcode}");

        let phone = text(&model, "PhoneNumber");
        assert!(phone.starts_with("07"));
        assert_eq!(phone.len(), 11);

        assert!(text(&model, "Url").starts_with("https://"));
    }
}

#[test]
fn test_email_ignores_string_conventions_for_other_names() {
    let registry = registry();
    let model = builder(&registry)
        .add_convention(ConventionRule::constant(
            ConventionFilter::EndsWith,
            "Test",
            TypeRef::String,
            "conventional",
        ))
        .construct()
        .unwrap()
        .build();

    assert!(text(&model, "Email").contains('@'));
    assert_eq!(text(&model, "MaxLengthTest"), "conventional");
}

#[test]
fn test_length_bounds() {
    let registry = registry();
    let mut builder = builder(&registry);

    for _ in 0..10 {
        let model = builder.construct().unwrap().build();

        assert!((5..=10).contains(&length(&model, "MaxLengthTest")));
        assert!((500..=1000).contains(&length(&model, "MinLengthTest")));
        assert!((50..=55).contains(&length(&model, "MinMaxLengthTest")));
        assert!(length(&model, "StringLengthTestNoMinimum") <= 10);
        assert!((45..=50).contains(&length(&model, "StringLengthTestMinAndMax")));
    }
}

#[test]
fn test_contradictory_string_length_aborts_build() {
    let registry = registry();
    let err = AutoBuilder::for_model(&registry, "ContradictoryModel")
        .with_seed(SEED)
        .construct()
        .err()
        .unwrap();

    match err {
        PopulateError::InvalidConstraint {
            property,
            minimum,
            maximum,
        } => {
            assert_eq!(property, "Broken");
            assert_eq!((minimum, maximum), (45, 10));
        }
        other => panic!("unexpected error: {other}"),
    }
}
