//! Echo capability

use crate::service::Service;

/// Echoes messages back to the caller
pub trait Echo: Service {
    /// Echo a message, returning the text that was emitted
    fn echo(&self, message: &str) -> String;
}

crate::capability!(dyn Echo => "locator.Echo");
