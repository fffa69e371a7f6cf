//! # Domain Layer
//!
//! Core types of the Service Locator: capabilities, the service contract,
//! service entries and the configurations that pair them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`capability`] | Capability identifiers and the `capability!` macro |
//! | [`service`] | `Service` marker contract, descriptors, capability casts |
//! | [`entry`] | `ServiceEntry` with derived capability sets |
//! | [`configuration`] | `ServiceConfiguration` and its authoring operations |
//! | [`document`] | Persisted (serde) form of configurations |
//! | [`ports`] | Capability traits implemented by providers |
//! | [`error`] | Domain error type |

pub mod capability;
pub mod configuration;
pub mod constants;
pub mod document;
pub mod entry;
pub mod error;
pub mod ports;
pub mod service;

// Re-export commonly used types
pub use capability::{Capability, CapabilityId};
pub use configuration::{CapabilityConflict, ServiceConfiguration};
pub use document::{ConfigurationDocument, EntryDocument, ImplementationDocument};
pub use entry::ServiceEntry;
pub use error::{Error, Result};
pub use service::{
    CapabilityBinding, CapabilityRef, Service, ServiceDescriptor, ServiceFactory,
    derive_capabilities,
};
