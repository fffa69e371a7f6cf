//! Service contract and static service type descriptions
//!
//! Every implementation stored in a service configuration implements the
//! [`Service`] marker contract. A concrete service type describes itself with a
//! `'static` [`ServiceDescriptor`]: its persistent type name, a factory used to
//! rebuild it from persisted settings, and one [`CapabilityBinding`] per
//! capability it satisfies.
//!
//! ## Declaring a service type
//!
//! ```
//! use std::sync::Arc;
//! use locator_domain::{bind_capability, capability, Service, ServiceDescriptor};
//!
//! pub trait Greeter: Service {
//!     fn greet(&self, name: &str) -> String;
//! }
//! capability!(dyn Greeter => "example.Greeter");
//!
//! #[derive(Debug)]
//! struct Polite;
//!
//! impl Greeter for Polite {
//!     fn greet(&self, name: &str) -> String {
//!         format!("Good day, {name}")
//!     }
//! }
//!
//! static POLITE: ServiceDescriptor = ServiceDescriptor {
//!     type_name: "example.Polite",
//!     description: "Greets politely",
//!     capabilities: &[bind_capability!(Polite => dyn Greeter)],
//!     factory: |_settings| Ok(Arc::new(Polite)),
//! };
//!
//! impl Service for Polite {
//!     fn descriptor(&self) -> &'static ServiceDescriptor {
//!         &POLITE
//!     }
//! }
//!
//! let ids = POLITE.capability_ids();
//! assert!(ids.iter().any(|id| id.as_str() == "example.Greeter"));
//! ```

use downcast_rs::{DowncastSync, impl_downcast};
use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::capability::{Capability, CapabilityId};
use crate::constants::MARKER_CAPABILITY;
use crate::error::{Error, Result};

/// Marker contract shared by every service implementation
pub trait Service: DowncastSync + fmt::Debug {
    /// Static description of the concrete type behind this instance
    fn descriptor(&self) -> &'static ServiceDescriptor;

    /// Settings needed to rebuild this instance through its factory
    fn settings(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}
impl_downcast!(sync Service);

crate::capability!(dyn Service => "locator.Service");

/// Factory rebuilding a service from its persisted settings
pub type ServiceFactory = fn(&serde_json::Value) -> std::result::Result<Arc<dyn Service>, String>;

/// Cast from the marker contract to one capability
pub type CapabilityCast = fn(Arc<dyn Service>) -> Option<CapabilityRef>;

/// Type-erased shared handle to one capability of a service instance
///
/// Holds an `Arc<T>` for the capability trait object type `T`.
pub struct CapabilityRef(Box<dyn Any + Send + Sync>);

impl CapabilityRef {
    /// Wrap a capability handle
    pub fn new<T>(handle: Arc<T>) -> Self
    where
        T: ?Sized + Capability + Send + Sync,
    {
        Self(Box::new(handle))
    }

    /// Borrow the capability as `T`, if this handle was created for `T`
    pub fn get<T: ?Sized + Capability>(&self) -> Option<&T> {
        self.0.downcast_ref::<Arc<T>>().map(|handle| &**handle)
    }
}

impl fmt::Debug for CapabilityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRef").finish_non_exhaustive()
    }
}

/// One capability satisfied by a service type
pub struct CapabilityBinding {
    /// Capability identifier
    pub id: &'static str,
    /// Converts an instance of the owning type into the capability handle
    pub cast: CapabilityCast,
}

impl fmt::Debug for CapabilityBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityBinding")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Static description of a concrete service type
pub struct ServiceDescriptor {
    /// Unique, persisted type name (e.g., "locator.providers.ConsoleEcho")
    pub type_name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Capabilities satisfied by the type
    pub capabilities: &'static [CapabilityBinding],
    /// Factory function to create instances from settings
    pub factory: ServiceFactory,
}

impl ServiceDescriptor {
    /// Capabilities this type satisfies, excluding the marker contract
    pub fn capability_ids(&self) -> BTreeSet<CapabilityId> {
        self.capabilities
            .iter()
            .filter(|binding| binding.id != MARKER_CAPABILITY)
            .map(|binding| CapabilityId::new(binding.id))
            .collect()
    }

    /// Binding for one capability identifier
    pub fn binding(&self, id: &str) -> Option<&CapabilityBinding> {
        self.capabilities.iter().find(|binding| binding.id == id)
    }

    /// Whether the type satisfies the capability
    pub fn provides(&self, id: &str) -> bool {
        id != MARKER_CAPABILITY && self.binding(id).is_some()
    }

    /// Build an instance from persisted settings
    pub fn instantiate(&self, settings: &serde_json::Value) -> Result<Arc<dyn Service>> {
        (self.factory)(settings).map_err(|e| Error::service_construction(self.type_name, e))
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("type_name", &self.type_name)
            .field("description", &self.description)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

/// Capabilities satisfied by a service instance, excluding the marker contract
pub fn derive_capabilities(service: &dyn Service) -> BTreeSet<CapabilityId> {
    service.descriptor().capability_ids()
}

/// Build a [`CapabilityBinding`] from a concrete service type to a capability
///
/// ```ignore
/// capabilities: &[
///     bind_capability!(MemoryStore => dyn KeyValueStore),
///     bind_capability!(MemoryStore => dyn KeyInventory),
/// ],
/// ```
#[macro_export]
macro_rules! bind_capability {
    ($service:ty => $cap:ty) => {
        $crate::service::CapabilityBinding {
            id: <$cap as $crate::capability::Capability>::ID,
            cast: |service| {
                let concrete = service.downcast_arc::<$service>().ok()?;
                let handle: ::std::sync::Arc<$cap> = concrete;
                ::std::option::Option::Some($crate::service::CapabilityRef::new(handle))
            },
        }
    };
}
