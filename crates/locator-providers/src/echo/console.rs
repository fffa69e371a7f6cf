//! Console echo service
//!
//! Emits every message through `tracing` and returns it unchanged.

use std::sync::Arc;

use locator_application::catalog::SERVICE_TYPES;
use locator_domain::ports::Echo;
use locator_domain::{Service, ServiceDescriptor, bind_capability};
use tracing::info;

use crate::constants::CONSOLE_ECHO_TYPE;

/// Echo that logs messages and returns them unchanged
#[derive(Debug, Clone, Default)]
pub struct ConsoleEcho;

impl ConsoleEcho {
    /// Create a console echo
    pub fn new() -> Self {
        Self
    }
}

impl Echo for ConsoleEcho {
    fn echo(&self, message: &str) -> String {
        info!(text = message, "Echo");
        message.to_string()
    }
}

impl Service for ConsoleEcho {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &CONSOLE_ECHO
    }
}

#[linkme::distributed_slice(SERVICE_TYPES)]
static CONSOLE_ECHO: ServiceDescriptor = ServiceDescriptor {
    type_name: CONSOLE_ECHO_TYPE,
    description: "Logs messages and returns them unchanged",
    capabilities: &[bind_capability!(ConsoleEcho => dyn Echo)],
    factory: |_| Ok(Arc::new(ConsoleEcho::new())),
};
