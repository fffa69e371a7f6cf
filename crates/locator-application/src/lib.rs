//! Application Layer - Service Locator
//!
//! Builds and serves the capability registry.
//!
//! ## Architecture
//!
//! - [`catalog`]: compile-time registry of concrete service types, used to
//!   rebuild persisted configurations
//! - [`registry`]: the load-once capability to implementation map
//! - [`report`]: warnings produced while loading
//! - [`source`]: port through which the registry obtains its configuration
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `locator-domain`: capabilities, entries and configurations
//! - `linkme` for service type registration, `once_cell` for the load-once map

pub mod catalog;
pub mod registry;
pub mod report;
pub mod source;

pub use catalog::{SERVICE_TYPES, ServiceCatalog};
pub use registry::{RegistryState, ServiceRegistry};
pub use report::{Diagnostic, LoadReport};
pub use source::ConfigurationSource;
