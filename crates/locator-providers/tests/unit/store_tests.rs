//! Tests for the in-memory key-value store

use std::collections::BTreeMap;

use locator_domain::Service;
use locator_domain::ports::{KeyInventory, KeyValueStore};
use locator_providers::MemoryStore;
use serde_json::json;

#[test]
fn test_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.get("a").is_none());

    assert_eq!(store.set("a", "1".to_string()), None);
    assert_eq!(store.set("a", "2".to_string()), Some("1".to_string()));
    assert_eq!(store.get("a"), Some("2".to_string()));

    assert_eq!(store.remove("a"), Some("2".to_string()));
    assert!(store.get("a").is_none());
}

#[test]
fn test_inventory_lists_sorted_keys() {
    let store = MemoryStore::new();
    store.set("b", "2".to_string());
    store.set("a", "1".to_string());

    assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(KeyInventory::len(&store), 2);
    assert!(!KeyInventory::is_empty(&store));
}

#[test]
fn test_seed_from_settings() {
    let service = MemoryStore::new()
        .descriptor()
        .instantiate(&json!({ "seed": { "greeting": "hi" } }))
        .expect("factory");
    let store = service.downcast_ref::<MemoryStore>().expect("MemoryStore");

    assert_eq!(store.get("greeting"), Some("hi".to_string()));
    assert_eq!(service.settings(), json!({ "seed": { "greeting": "hi" } }));
}

#[test]
fn test_unseeded_store_has_no_settings() {
    assert!(MemoryStore::new().settings().is_null());
    assert!(MemoryStore::with_seed(BTreeMap::new()).settings().is_null());
}

#[test]
fn test_concurrent_writers() {
    let store = MemoryStore::new();
    std::thread::scope(|scope| {
        for worker in 0..4 {
            let store = &store;
            scope.spawn(move || {
                for i in 0..25 {
                    store.set(&format!("{worker}-{i}"), i.to_string());
                }
            });
        }
    });
    assert_eq!(KeyInventory::len(&store), 100);
}
