//! Post-build overrides through the builder.

use crate::{registry, SEED};
use graphfill::{AutoBuilder, OverridePath, PopulateError, ValueRequest};
use model_core::{SemanticKind, Value};
use value_generator::{Casing, CharacterSet, StringRequest};

#[test]
fn test_nested_override_changes_one_property() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Person").with_seed(SEED);

    let populated = builder.construct().unwrap();
    let before = populated.entity().clone();
    let person = populated
        .with(OverridePath::property("Home").then("Street"), "Baker Street")
        .unwrap()
        .build();

    assert_eq!(person.pointer("Home.Street"), Some(&Value::from("Baker Street")));
    assert_eq!(person.pointer("Home.Number"), before.pointer("Home.Number"));
    assert_eq!(person.pointer("FirstName"), before.pointer("FirstName"));
    assert_eq!(person.pointer("Friends"), before.pointer("Friends"));
}

#[test]
fn test_generated_overrides() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Person").with_seed(SEED);

    let person = builder
        .construct()
        .unwrap()
        .with_string_length("FirstName", 30, 40)
        .unwrap()
        .with_string(
            "LastName",
            StringRequest::exact(6)
                .with_character_set(CharacterSet::Alphabetic)
                .with_casing(Casing::Uppercase),
        )
        .unwrap()
        .with_int_range("Age", 65, 70)
        .unwrap()
        .with_double_range("Rating", 4.5, 5.0)
        .unwrap()
        .with_semantic("Home.Street", SemanticKind::Url)
        .unwrap()
        .with_generated("Home.Number", ValueRequest::Integer { min: 7, max: 7 })
        .unwrap()
        .build();

    let first = person.pointer("FirstName").and_then(Value::as_str).unwrap();
    assert!((30..=40).contains(&first.chars().count()));

    let last = person.pointer("LastName").and_then(Value::as_str).unwrap();
    assert_eq!(last.chars().count(), 6);
    assert!(last.chars().all(|c| c.is_uppercase()));

    assert!((65..=70).contains(&person.pointer("Age").and_then(Value::as_int).unwrap()));
    let rating = person.pointer("Rating").and_then(Value::as_double).unwrap();
    assert!((4.5..=5.0).contains(&rating));
    assert!(person
        .pointer("Home.Street")
        .and_then(Value::as_str)
        .unwrap()
        .starts_with("https://"));
    assert_eq!(person.pointer("Home.Number"), Some(&Value::Int(7)));
}

#[test]
fn test_override_through_unset_property_fails() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Person")
        .with_seed(SEED)
        .configure(|configuration| configuration.max_depth = 1);

    // Depth 1 leaves Home unset
    let err = builder
        .construct()
        .unwrap()
        .with("Home.Street", "Nowhere")
        .err()
        .unwrap();

    match err {
        PopulateError::PreconditionViolation { path, reason } => {
            assert_eq!(path, "Home.Street");
            assert!(reason.contains("Home"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_override_type_and_access_checks() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Person").with_seed(SEED);

    let err = builder
        .construct()
        .unwrap()
        .with("Age", "old")
        .err()
        .unwrap();
    assert!(matches!(err, PopulateError::TypeMismatch { .. }));

    let err = builder
        .construct()
        .unwrap()
        .with("Id", 5)
        .err()
        .unwrap();
    assert!(matches!(err, PopulateError::PreconditionViolation { .. }));

    // Nullable properties accept null
    let person = builder
        .construct()
        .unwrap()
        .with("Rating", Value::Null)
        .unwrap()
        .build();
    assert_eq!(person.pointer("Rating"), Some(&Value::Null));
}
