//! Service Type Catalog
//!
//! Compile-time registration of concrete service types. Each provider declares
//! a `'static` [`ServiceDescriptor`] in the [`SERVICE_TYPES`] distributed slice;
//! the catalog collects them into a lookup table keyed by type name and uses
//! the registered factories to rebuild persisted configurations.
//!
//! ## Registration Flow
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(SERVICE_TYPES)]
//!                       static ENTRY: ServiceDescriptor = ...
//!                             ↓
//! 2. Catalog collects:  ServiceCatalog::discover()
//!                             ↓
//! 3. Store reads:       ConfigurationDocument (type name + settings)
//!                             ↓
//! 4. Catalog builds:    catalog.materialize(&document) → ServiceConfiguration
//! ```
//!
//! ## Registering a Service Type (in locator-providers)
//!
//! ```ignore
//! use locator_application::catalog::SERVICE_TYPES;
//!
//! #[linkme::distributed_slice(SERVICE_TYPES)]
//! static CONSOLE_ECHO: ServiceDescriptor = ServiceDescriptor {
//!     type_name: "locator.providers.ConsoleEcho",
//!     description: "Echoes messages to the log",
//!     capabilities: &[bind_capability!(ConsoleEcho => dyn Echo)],
//!     factory: console_echo_factory,
//! };
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use locator_domain::error::{Error, Result};
use locator_domain::{
    ConfigurationDocument, Service, ServiceConfiguration, ServiceDescriptor, ServiceEntry,
};
use tracing::{debug, warn};

// Auto-collection via linkme distributed slices - providers submit descriptors at compile time
#[linkme::distributed_slice]
pub static SERVICE_TYPES: [ServiceDescriptor] = [..];

/// Lookup table of service types by type name
#[derive(Default, Clone)]
pub struct ServiceCatalog {
    types: BTreeMap<&'static str, &'static ServiceDescriptor>,
}

impl ServiceCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of every type registered in [`SERVICE_TYPES`]
    pub fn discover() -> Self {
        let mut catalog = Self::new();
        for descriptor in SERVICE_TYPES {
            catalog.register(descriptor);
        }
        debug!(types = catalog.len(), "Discovered service types");
        catalog
    }

    /// Register one service type.
    ///
    /// Returns `false` and keeps the existing descriptor when the type name is
    /// already taken.
    pub fn register(&mut self, descriptor: &'static ServiceDescriptor) -> bool {
        if let Some(existing) = self.types.get(descriptor.type_name) {
            if !std::ptr::eq(*existing, descriptor) {
                warn!(
                    type_name = descriptor.type_name,
                    "Service type registered twice, keeping the first registration"
                );
            }
            return false;
        }
        self.types.insert(descriptor.type_name, descriptor);
        true
    }

    /// Descriptor for a type name
    pub fn get(&self, type_name: &str) -> Option<&'static ServiceDescriptor> {
        self.types.get(type_name).copied()
    }

    /// All registered descriptors, sorted by type name
    pub fn descriptors(&self) -> impl Iterator<Item = &'static ServiceDescriptor> + '_ {
        self.types.values().copied()
    }

    /// Registered (type name, description) pairs, sorted by type name
    pub fn list(&self) -> Vec<(&'static str, &'static str)> {
        self.descriptors()
            .map(|descriptor| (descriptor.type_name, descriptor.description))
            .collect()
    }

    /// Types providing a capability, sorted by type name
    pub fn implementors(&self, capability: &str) -> Vec<&'static ServiceDescriptor> {
        self.descriptors()
            .filter(|descriptor| descriptor.provides(capability))
            .collect()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Build an instance of a registered type from its settings
    pub fn instantiate(
        &self,
        type_name: &str,
        settings: &serde_json::Value,
    ) -> Result<Arc<dyn Service>> {
        let Some(descriptor) = self.get(type_name) else {
            warn!(
                type_name,
                available = ?self.types.keys().collect::<Vec<_>>(),
                "Unknown service type"
            );
            return Err(Error::unknown_service_type(type_name));
        };
        descriptor.instantiate(settings)
    }

    /// Rebuild a configuration from its persisted document.
    ///
    /// Capabilities are kept exactly as persisted; they are not re-derived
    /// from the instantiated types.
    pub fn materialize(&self, document: &ConfigurationDocument) -> Result<ServiceConfiguration> {
        let entries = document
            .entries
            .iter()
            .map(|entry| {
                let implementation = entry
                    .implementation
                    .as_ref()
                    .map(|imp| self.instantiate(&imp.type_name, &imp.settings))
                    .transpose()?;
                Ok(ServiceEntry::from_parts(
                    implementation,
                    entry.capabilities.iter().cloned(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ServiceConfiguration::from_entries(entries))
    }
}

impl fmt::Debug for ServiceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCatalog")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}
