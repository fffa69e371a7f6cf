//! Clock capability

use crate::service::Service;

/// Source of wall-clock time
pub trait Clock: Service {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

crate::capability!(dyn Clock => "locator.Clock");
