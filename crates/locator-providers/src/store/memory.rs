//! In-memory key-value store
//!
//! One instance satisfies two capabilities, so a single configuration entry
//! registers both `KeyValueStore` and `KeyInventory`.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use locator_application::catalog::SERVICE_TYPES;
use locator_domain::ports::{KeyInventory, KeyValueStore};
use locator_domain::{Service, ServiceDescriptor, bind_capability};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MEMORY_STORE_TYPE;
use crate::utils::{parse_settings, settings_value};

/// Persisted settings of [`MemoryStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryStoreSettings {
    /// Entries present when the store is created
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub seed: BTreeMap<String, String>,
}

/// Concurrent in-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: MemoryStoreSettings,
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `seed`
    pub fn with_seed(seed: BTreeMap<String, String>) -> Self {
        let entries = seed
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self {
            settings: MemoryStoreSettings { seed },
            entries,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|value| value.value().clone())
    }

    fn set(&self, key: &str, value: String) -> Option<String> {
        debug!(key, "Store set");
        self.entries.insert(key.to_string(), value)
    }

    fn remove(&self, key: &str) -> Option<String> {
        self.entries.remove(key).map(|(_, value)| value)
    }
}

impl KeyInventory for MemoryStore {
    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Service for MemoryStore {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &MEMORY_STORE
    }

    fn settings(&self) -> serde_json::Value {
        if self.settings.seed.is_empty() {
            return serde_json::Value::Null;
        }
        settings_value(&self.settings)
    }
}

fn memory_store_factory(settings: &serde_json::Value) -> Result<Arc<dyn Service>, String> {
    let settings: MemoryStoreSettings = parse_settings(settings)?;
    Ok(Arc::new(MemoryStore::with_seed(settings.seed)))
}

#[linkme::distributed_slice(SERVICE_TYPES)]
static MEMORY_STORE: ServiceDescriptor = ServiceDescriptor {
    type_name: MEMORY_STORE_TYPE,
    description: "Concurrent in-memory key-value store",
    capabilities: &[
        bind_capability!(MemoryStore => dyn KeyValueStore),
        bind_capability!(MemoryStore => dyn KeyInventory),
    ],
    factory: memory_store_factory,
};
