//! Facade re-export tests

use std::sync::Arc;

use locator::domain::ports::{KeyInventory, KeyValueStore};
use locator::providers::MemoryStore;
use locator::{ServiceConfiguration, ServiceRegistry};

#[test]
fn test_registry_through_facade() {
    let mut config = ServiceConfiguration::new();
    config.push(Arc::new(MemoryStore::new()));

    let registry = ServiceRegistry::new();
    registry.load(&config).unwrap();

    let store = registry.resolve::<dyn KeyValueStore>().unwrap();
    store.set("a", "1".to_string());

    let mut inventory: Option<&dyn KeyInventory> = None;
    assert!(registry.resolve_into(&mut inventory));
    assert_eq!(inventory.map(KeyInventory::len), Some(1));
}
