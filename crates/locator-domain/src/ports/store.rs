//! Key-value store capabilities

use crate::service::Service;

/// String key-value storage
pub trait KeyValueStore: Service {
    /// Value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, returning the previous value
    fn set(&self, key: &str, value: String) -> Option<String>;

    /// Remove `key`, returning its value
    fn remove(&self, key: &str) -> Option<String>;
}

crate::capability!(dyn KeyValueStore => "locator.KeyValueStore");

/// Read-only view over the keys held by a store
pub trait KeyInventory: Service {
    /// Stored keys, sorted
    fn keys(&self) -> Vec<String>;

    /// Number of stored keys
    fn len(&self) -> usize;

    /// Whether the store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

crate::capability!(dyn KeyInventory => "locator.KeyInventory");
