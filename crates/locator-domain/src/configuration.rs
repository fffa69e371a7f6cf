//! Service configurations
//!
//! A [`ServiceConfiguration`] is the ordered list of [`ServiceEntry`] values
//! loaded by the registry. Order matters: when two entries claim the same
//! capability, the earlier entry wins.

use std::collections::HashMap;
use std::sync::Arc;

use crate::capability::CapabilityId;
use crate::document::{ConfigurationDocument, EntryDocument, ImplementationDocument};
use crate::entry::ServiceEntry;
use crate::error::{Error, Result};
use crate::service::Service;

/// Two entries claiming the same capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityConflict {
    /// The contested capability
    pub capability: CapabilityId,
    /// Index of the entry that owns the capability
    pub first: usize,
    /// Index of the later entry whose claim is ignored
    pub duplicate: usize,
}

/// Ordered collection of service entries
#[derive(Debug, Clone, Default)]
pub struct ServiceConfiguration {
    entries: Vec<ServiceEntry>,
}

impl ServiceConfiguration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from existing entries, in order
    pub fn from_entries(entries: Vec<ServiceEntry>) -> Self {
        Self { entries }
    }

    /// All entries in persisted order
    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    /// Entry at `index`, if any
    pub fn entry(&self, index: usize) -> Option<&ServiceEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an empty entry and return its index
    pub fn add_entry(&mut self) -> usize {
        self.entries.push(ServiceEntry::empty());
        self.entries.len() - 1
    }

    /// Append an entry holding `service` and return its index
    pub fn push(&mut self, service: Arc<dyn Service>) -> usize {
        self.entries.push(ServiceEntry::new(Some(service)));
        self.entries.len() - 1
    }

    /// Remove the entry at `index`, shifting later entries down
    pub fn remove_entry(&mut self, index: usize) -> Result<ServiceEntry> {
        if index >= self.entries.len() {
            return Err(Error::index_out_of_range(index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }

    /// Replace the implementation at `index` and recompute its capabilities
    pub fn set_implementation(
        &mut self,
        index: usize,
        implementation: Option<Arc<dyn Service>>,
    ) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        entry.set_implementation(implementation);
        Ok(())
    }

    /// Capabilities claimed by more than one entry, in entry order
    pub fn conflicts(&self) -> Vec<CapabilityConflict> {
        let mut owners: HashMap<&CapabilityId, usize> = HashMap::new();
        let mut conflicts = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            for capability in entry.capabilities() {
                match owners.get(capability) {
                    Some(&first) => conflicts.push(CapabilityConflict {
                        capability: capability.clone(),
                        first,
                        duplicate: index,
                    }),
                    None => {
                        owners.insert(capability, index);
                    }
                }
            }
        }
        conflicts
    }

    /// Persistable form of this configuration
    pub fn to_document(&self) -> ConfigurationDocument {
        let entries = self
            .entries
            .iter()
            .map(|entry| EntryDocument {
                implementation: entry.implementation().map(|service| ImplementationDocument {
                    type_name: service.descriptor().type_name.to_string(),
                    settings: service.settings(),
                }),
                capabilities: entry.capabilities().iter().cloned().collect(),
            })
            .collect();
        ConfigurationDocument { entries }
    }
}
