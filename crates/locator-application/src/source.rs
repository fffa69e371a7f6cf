//! Configuration source port
//!
//! The registry does not know how configurations are persisted. It asks a
//! [`ConfigurationSource`] for an already-materialized value.

use locator_domain::ServiceConfiguration;
use locator_domain::error::Result;

/// Supplies the service configuration to load
pub trait ConfigurationSource {
    /// Fetch the configuration.
    ///
    /// `Ok(None)` means no configuration exists.
    fn fetch(&self) -> Result<Option<ServiceConfiguration>>;
}

impl ConfigurationSource for ServiceConfiguration {
    fn fetch(&self) -> Result<Option<ServiceConfiguration>> {
        Ok(Some(self.clone()))
    }
}

impl<F> ConfigurationSource for F
where
    F: Fn() -> Result<Option<ServiceConfiguration>>,
{
    fn fetch(&self) -> Result<Option<ServiceConfiguration>> {
        self()
    }
}
