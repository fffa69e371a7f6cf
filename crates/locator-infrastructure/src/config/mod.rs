//! Configuration management
//!
//! Layered application configuration: defaults, then a TOML file, then
//! `LOCATOR__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DocumentFormat, LoggingConfig, ServicesConfig};
