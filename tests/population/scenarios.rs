//! End-to-end population scenarios.

use crate::{fixture, registry, SEED};
use graphfill::{
    AutoBuilder, ConventionFilter, ConventionRule, ListPopulator, PopulateError,
    PopulationConfiguration,
};
use model_core::{TypeRef, Value};
use serde::Deserialize;

fn node_chain_length(node: &Value) -> usize {
    match node.as_model() {
        Some(instance) => 1 + instance.get("Next").map(node_chain_length).unwrap_or(0),
        None => 0,
    }
}

#[test]
fn test_count_convention_yields_exact_value() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Person")
        .with_seed(SEED)
        .add_convention(ConventionRule::constant(
            ConventionFilter::Exact,
            "Count",
            TypeRef::Int,
            42,
        ));

    for _ in 0..5 {
        let person = builder.construct().unwrap().build();
        assert_eq!(person.pointer("Count"), Some(&Value::Int(42)));
    }
}

#[test]
fn test_every_kind_is_populated() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Person").with_seed(SEED);
    let person = builder.construct().unwrap().build();

    assert!(person.pointer("FirstName").and_then(Value::as_str).is_some());
    assert!((1..=1000).contains(&person.pointer("Age").and_then(Value::as_int).unwrap()));
    assert!(person.pointer("Rating").and_then(Value::as_double).is_some());
    assert!(person.pointer("Active").and_then(Value::as_bool).is_some());
    assert!(person.pointer("Flags").and_then(Value::as_byte).unwrap() >= 1);
    assert_eq!(
        person.pointer("Nicknames").and_then(Value::as_list).unwrap().len(),
        2
    );
    assert_eq!(
        person.pointer("LuckyNumbers").and_then(Value::as_list).unwrap().len(),
        2
    );

    // Read-only properties keep their unset value
    assert_eq!(person.pointer("Id"), Some(&Value::Int(0)));

    // Address has no parameterless constructor
    let home = person.pointer("Home").and_then(Value::as_model).unwrap();
    assert!(home.get("Street").and_then(Value::as_str).is_some());
    assert!(home.get("Number").and_then(Value::as_int).unwrap() >= 1);
    assert!(home.get("Postcode").and_then(Value::as_str).unwrap().contains(' '));
}

#[test]
fn test_explicit_constructor_values_survive_population() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Address").with_seed(SEED);

    let address = builder
        .construct_with(vec![Value::from("Baker Street"), Value::Int(221)])
        .unwrap()
        .build();

    assert_eq!(address.pointer("Street"), Some(&Value::from("Baker Street")));
    assert_eq!(address.pointer("Number"), Some(&Value::Int(221)));
    assert!(address.pointer("Postcode").and_then(Value::as_str).is_some());

    let err = builder
        .construct_with(vec![Value::Int(221)])
        .err()
        .unwrap();
    assert!(matches!(err, PopulateError::NoMatchingConstructor { .. }));
}

#[test]
fn test_self_reference_terminates_for_any_depth() {
    let registry = registry();

    for max_depth in 0..6 {
        let mut builder = AutoBuilder::for_model(&registry, "Node")
            .with_seed(SEED)
            .configure(|configuration| configuration.max_depth = max_depth);
        let node = builder.construct().unwrap().build();

        assert_eq!(node_chain_length(&node), max_depth.max(1));
    }
}

#[test]
fn test_list_population_cardinality_and_identity() {
    let populator = ListPopulator::new(5);
    let mut existing = Vec::with_capacity(8);
    existing.push(Value::from("x"));
    let allocation = existing.as_ptr();

    let items = populator
        .populate(
            "Nicknames",
            &TypeRef::String,
            Some(existing),
            1,
            None,
            |_, _, _, _, _| Ok(Value::from("y")),
        )
        .unwrap();

    assert_eq!(items.len(), 5);
    assert_eq!(items.as_ptr(), allocation);
}

#[test]
fn test_supplied_list_is_refilled_to_item_count() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Basket")
        .with_seed(SEED)
        .configure(|configuration| configuration.default_collection_item_count = 4);

    let supplied = vec![Value::from("apple")];
    let basket = builder
        .construct_with(vec![Value::List(supplied)])
        .unwrap()
        .build();

    let items = basket.pointer("Items").and_then(Value::as_list).unwrap();
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|item| item.as_str().is_some()));
    assert!(basket.pointer("Owner").and_then(Value::as_str).is_some());

    let many: Vec<Value> = (0..9).map(|i| Value::from(format!("item{i}"))).collect();
    let basket = builder
        .construct_with(vec![Value::List(many)])
        .unwrap()
        .build();
    assert_eq!(basket.pointer("Items").and_then(Value::as_list).unwrap().len(), 4);
}

#[test]
fn test_uninstantiable_targets() {
    let registry = registry();

    let err = AutoBuilder::for_model(&registry, "Shape")
        .construct()
        .err()
        .unwrap();
    assert!(err.to_string().contains("abstract"));

    // Interface-typed properties are never silently left unset
    let err = AutoBuilder::for_model(&registry, "Zoo")
        .construct()
        .err()
        .unwrap();
    assert!(matches!(err, PopulateError::UnsupportedType { ref type_name, .. } if type_name == "Animal"));
}

#[test]
fn test_configuration_file() {
    let registry = registry();
    let configuration = PopulationConfiguration::from_file(fixture("population.yaml")).unwrap();
    let mut builder = AutoBuilder::for_model(&registry, "Person")
        .with_seed(SEED)
        .with_configuration(configuration);

    let person = builder.construct().unwrap().build();

    assert_eq!(person.pointer("Count"), Some(&Value::Int(42)));
    assert_eq!(person.pointer("FirstName"), Some(&Value::from("Fixture")));
    assert_eq!(person.pointer("LastName"), Some(&Value::from("Fixture")));
    assert!((1..=99).contains(&person.pointer("Age").and_then(Value::as_int).unwrap()));

    let friends = person.pointer("Friends").and_then(Value::as_list).unwrap();
    assert_eq!(friends.len(), 3);
    for friend in friends {
        // Friends sit two levels down, so their own nested models are cut off
        assert_eq!(friend.pointer("Home"), Some(&Value::Null));
        assert!(friend
            .pointer("Friends")
            .and_then(Value::as_list)
            .unwrap()
            .iter()
            .all(Value::is_null));
    }

    let street = person.pointer("Home.Street").and_then(Value::as_str).unwrap();
    assert!((8..=12).contains(&street.chars().count()));
    assert!(street.starts_with(|c: char| c.is_uppercase()));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Address {
    street: String,
    number: i32,
    postcode: String,
}

#[test]
fn test_build_into_typed_struct() {
    let registry = registry();
    let mut builder = AutoBuilder::for_model(&registry, "Address").with_seed(SEED);

    let address: Address = builder.construct().unwrap().build_into().unwrap();
    assert!(!address.street.is_empty());
    assert!(address.number >= 1);
    assert!(address.postcode.contains(' '));
}
