//! Unit tests for service configuration authoring

use crate::test_utils::{alpha, beta, both};
use locator_domain::{CapabilityId, Error, ServiceConfiguration};

#[test]
fn test_add_entry_appends_empty_slot() {
    let mut config = ServiceConfiguration::new();
    assert!(config.is_empty());

    let index = config.add_entry();
    assert_eq!(index, 0);
    assert_eq!(config.len(), 1);
    let entry = config.entry(0).expect("entry exists");
    assert!(entry.implementation().is_none());
    assert!(entry.capabilities().is_empty());
}

#[test]
fn test_set_implementation_round_trip() {
    let mut config = ServiceConfiguration::new();
    let index = config.add_entry();

    config
        .set_implementation(index, Some(both()))
        .expect("index is valid");
    let claimed: Vec<&str> = config.entries()[index]
        .capabilities()
        .iter()
        .map(CapabilityId::as_str)
        .collect();
    assert_eq!(claimed, vec!["test.Bar", "test.Foo"]);

    config
        .set_implementation(index, None)
        .expect("index is valid");
    assert!(config.entries()[index].capabilities().is_empty());
}

#[test]
fn test_set_implementation_out_of_range() {
    let mut config = ServiceConfiguration::new();
    config.add_entry();

    match config.set_implementation(3, Some(alpha())) {
        Err(Error::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 1);
        }
        other => panic!("Expected IndexOutOfRange, got {other:?}"),
    }
    assert!(config.entries()[0].is_empty());
}

#[test]
fn test_remove_entry_shifts_later_entries() {
    let mut config = ServiceConfiguration::new();
    config.push(alpha());
    config.push(beta(1));
    config.push(both());

    let removed = config.remove_entry(1).expect("index is valid");
    assert_eq!(removed.type_name(), Some("test.Beta"));
    assert_eq!(config.len(), 2);
    assert_eq!(config.entries()[1].type_name(), Some("test.Both"));
}

#[test]
fn test_remove_entry_out_of_range_leaves_configuration_unchanged() {
    let mut config = ServiceConfiguration::new();
    config.push(alpha());
    config.push(beta(1));
    config.push(both());

    let result = config.remove_entry(5);
    assert!(matches!(
        result,
        Err(Error::IndexOutOfRange { index: 5, len: 3 })
    ));

    let names: Vec<_> = config.entries().iter().map(|e| e.type_name()).collect();
    assert_eq!(
        names,
        vec![Some("test.Alpha"), Some("test.Beta"), Some("test.Both")]
    );
}

#[test]
fn test_conflicts_report_first_and_duplicate() {
    let mut config = ServiceConfiguration::new();
    config.push(alpha());
    config.push(beta(1));
    config.push(both());

    let conflicts = config.conflicts();
    assert_eq!(conflicts.len(), 2);
    for conflict in &conflicts {
        assert_eq!(conflict.duplicate, 2);
    }
    let foo = conflicts
        .iter()
        .find(|c| c.capability.as_str() == "test.Foo")
        .expect("Foo conflict");
    assert_eq!(foo.first, 0);
    let bar = conflicts
        .iter()
        .find(|c| c.capability.as_str() == "test.Bar")
        .expect("Bar conflict");
    assert_eq!(bar.first, 1);
}

#[test]
fn test_to_document_records_types_and_settings() {
    let mut config = ServiceConfiguration::new();
    config.push(beta(42));
    config.add_entry();

    let document = config.to_document();
    assert_eq!(document.entries.len(), 2);

    let first = &document.entries[0];
    let implementation = first.implementation.as_ref().expect("implementation");
    assert_eq!(implementation.type_name, "test.Beta");
    assert_eq!(implementation.settings, serde_json::json!({ "value": 42 }));
    assert_eq!(first.capabilities, vec![CapabilityId::new("test.Bar")]);

    let second = &document.entries[1];
    assert!(second.implementation.is_none());
    assert!(second.capabilities.is_empty());
}
