//! # Service Locator - Provider Implementations
//!
//! Concrete services selectable through a service configuration. Every type
//! registers a [`ServiceDescriptor`](locator_domain::ServiceDescriptor) in the
//! `SERVICE_TYPES` distributed slice, so linking this crate is enough for the
//! catalog to find them.
//!
//! ## Service Types
//!
//! | Capability | Implementations |
//! |------------|-----------------|
//! | `Echo` | ConsoleEcho, PrefixedEcho |
//! | `Clock` | SystemClock, FixedClock |
//! | `KeyValueStore` + `KeyInventory` | MemoryStore |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! locator-providers = { version = "0.1", default-features = false, features = ["clock"] }
//! ```
//!
//! Binaries that only reference the catalog must still link this crate:
//!
//! ```ignore
//! extern crate locator_providers;
//! ```

/// Persisted type names and defaults
pub mod constants;

/// Settings helpers shared by factories
pub mod utils;

/// Echo services
#[cfg(feature = "echo")]
pub mod echo;

/// Clock services
#[cfg(feature = "clock")]
pub mod clock;

/// Key-value store services
pub mod store;

#[cfg(feature = "clock")]
pub use clock::{FixedClock, SystemClock};
#[cfg(feature = "echo")]
pub use echo::{ConsoleEcho, PrefixedEcho};
#[cfg(feature = "store-memory")]
pub use store::MemoryStore;
