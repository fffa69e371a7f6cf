//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered application configuration |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |
//! | [`store`] | File-backed service configuration documents |
//! | [`bootstrap`] | Composition root building the registry |
//! | [`error_ext`] | Error context extension trait |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use bootstrap::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use store::{FileConfigurationStore, StoreSource};
