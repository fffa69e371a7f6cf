//! Service entries
//!
//! A [`ServiceEntry`] pairs one implementation instance with the set of
//! capabilities it satisfies. The capability set is derived from the
//! implementation on every write, so a persisted entry is self-describing
//! without the concrete type system at load time.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::capability::CapabilityId;
use crate::service::{Service, derive_capabilities};

/// One implementation and the capabilities it satisfies
#[derive(Debug, Clone, Default)]
pub struct ServiceEntry {
    implementation: Option<Arc<dyn Service>>,
    capabilities: BTreeSet<CapabilityId>,
}

impl ServiceEntry {
    /// Create an entry, deriving capabilities from the implementation
    pub fn new(implementation: Option<Arc<dyn Service>>) -> Self {
        let mut entry = Self::default();
        entry.set_implementation(implementation);
        entry
    }

    /// Create an entry with no implementation and no capabilities
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild a persisted entry, keeping the capabilities as they were stored.
    ///
    /// An absent implementation always yields an empty capability set.
    pub fn from_parts(
        implementation: Option<Arc<dyn Service>>,
        capabilities: impl IntoIterator<Item = CapabilityId>,
    ) -> Self {
        let capabilities = match implementation {
            Some(_) => capabilities
                .into_iter()
                .filter(|id| !id.is_marker())
                .collect(),
            None => BTreeSet::new(),
        };
        Self {
            implementation,
            capabilities,
        }
    }

    /// The implementation instance, if any
    pub fn implementation(&self) -> Option<&Arc<dyn Service>> {
        self.implementation.as_ref()
    }

    /// The capabilities claimed by this entry
    pub fn capabilities(&self) -> &BTreeSet<CapabilityId> {
        &self.capabilities
    }

    /// Type name of the implementation, if any
    pub fn type_name(&self) -> Option<&'static str> {
        self.implementation
            .as_ref()
            .map(|service| service.descriptor().type_name)
    }

    /// Whether the entry claims a capability
    pub fn claims(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Whether the entry has no implementation
    pub fn is_empty(&self) -> bool {
        self.implementation.is_none()
    }

    /// Replace the implementation and recompute the capability set
    pub fn set_implementation(&mut self, implementation: Option<Arc<dyn Service>>) {
        self.capabilities = implementation
            .as_ref()
            .map(|service| derive_capabilities(service.as_ref()))
            .unwrap_or_default();
        self.implementation = implementation;
    }
}
