//! # Service Locator
//!
//! Configuration-driven service registry: components depend on an abstract
//! capability and resolve it to the one implementation selected by the
//! service configuration.
//!
//! This crate is the public facade. It re-exports the layer crates and hosts
//! the `locator` command line tool used to author service configurations.
//!
//! ## Example
//!
//! ```ignore
//! use locator::infrastructure::{config::ConfigLoader, init_app};
//! use locator::domain::ports::Echo;
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let registry = context.registry();
//! println!("{}", registry.resolve::<dyn Echo>()?.echo("hello"));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capabilities, service contract, entries and configurations
//! - `application` - service type catalog and the load-once registry
//! - `infrastructure` - config, logging, file store and bootstrap
//! - `providers` - bundled service implementations

/// Domain layer - capabilities, entries and configurations
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use locator_domain::*;
}

/// Application layer - catalog and registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use locator_application::*;
}

/// Infrastructure layer - config, logging, persistence and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use locator_infrastructure::*;
}

/// Bundled service implementations
pub use locator_providers as providers;

pub mod cli;

// Re-export commonly used types at the crate root
pub use application::{LoadReport, ServiceCatalog, ServiceRegistry};
pub use domain::{Capability, Error, Result, Service, ServiceConfiguration, ServiceEntry};
