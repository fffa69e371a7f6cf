//! Unit tests for service entries

use crate::test_utils::{alpha, beta, both};
use locator_domain::{CapabilityId, ServiceEntry};

fn ids(names: &[&str]) -> Vec<CapabilityId> {
    names.iter().map(|name| CapabilityId::new(*name)).collect()
}

#[test]
fn test_empty_entry_has_no_capabilities() {
    let entry = ServiceEntry::empty();
    assert!(entry.is_empty());
    assert!(entry.implementation().is_none());
    assert!(entry.capabilities().is_empty());
    assert_eq!(entry.type_name(), None);
}

#[test]
fn test_new_entry_derives_capabilities() {
    let entry = ServiceEntry::new(Some(alpha()));
    assert_eq!(entry.type_name(), Some("test.Alpha"));
    assert!(entry.claims("test.Foo"));
    assert!(!entry.claims("test.Bar"));
}

#[test]
fn test_set_implementation_recomputes_capabilities() {
    let mut entry = ServiceEntry::new(Some(alpha()));

    entry.set_implementation(Some(beta(7)));
    let derived: Vec<CapabilityId> = entry.capabilities().iter().cloned().collect();
    assert_eq!(derived, ids(&["test.Bar"]));

    entry.set_implementation(None);
    assert!(entry.capabilities().is_empty());
    assert!(entry.is_empty());
}

#[test]
fn test_marker_contract_is_excluded() {
    let entry = ServiceEntry::new(Some(both()));
    let derived: Vec<CapabilityId> = entry.capabilities().iter().cloned().collect();
    assert_eq!(derived, ids(&["test.Bar", "test.Foo"]));
    assert!(!entry.claims("locator.Service"));
}

#[test]
fn test_from_parts_keeps_persisted_capabilities() {
    let entry = ServiceEntry::from_parts(Some(alpha()), ids(&["test.Foo", "test.Legacy"]));
    assert!(entry.claims("test.Foo"));
    assert!(entry.claims("test.Legacy"));
}

#[test]
fn test_from_parts_without_implementation_drops_capabilities() {
    let entry = ServiceEntry::from_parts(None, ids(&["test.Foo"]));
    assert!(entry.capabilities().is_empty());
}
