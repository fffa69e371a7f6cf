//! Prefixed echo service

use std::sync::Arc;

use locator_application::catalog::SERVICE_TYPES;
use locator_domain::ports::Echo;
use locator_domain::{Service, ServiceDescriptor, bind_capability};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ECHO_PREFIX, PREFIXED_ECHO_TYPE};
use crate::utils::{parse_settings, settings_value};

/// Persisted settings of [`PrefixedEcho`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrefixedEchoSettings {
    /// Text prepended to every message
    pub prefix: String,
}

impl Default for PrefixedEchoSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ECHO_PREFIX.to_string(),
        }
    }
}

/// Echo that prepends a fixed prefix
#[derive(Debug, Clone, Default)]
pub struct PrefixedEcho {
    settings: PrefixedEchoSettings,
}

impl PrefixedEcho {
    /// Create a prefixed echo
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            settings: PrefixedEchoSettings {
                prefix: prefix.into(),
            },
        }
    }

    /// The configured prefix
    pub fn prefix(&self) -> &str {
        &self.settings.prefix
    }
}

impl Echo for PrefixedEcho {
    fn echo(&self, message: &str) -> String {
        format!("{}{message}", self.settings.prefix)
    }
}

impl Service for PrefixedEcho {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &PREFIXED_ECHO
    }

    fn settings(&self) -> serde_json::Value {
        settings_value(&self.settings)
    }
}

fn prefixed_echo_factory(settings: &serde_json::Value) -> Result<Arc<dyn Service>, String> {
    let settings: PrefixedEchoSettings = parse_settings(settings)?;
    Ok(Arc::new(PrefixedEcho { settings }))
}

#[linkme::distributed_slice(SERVICE_TYPES)]
static PREFIXED_ECHO: ServiceDescriptor = ServiceDescriptor {
    type_name: PREFIXED_ECHO_TYPE,
    description: "Prepends a configured prefix to every message",
    capabilities: &[bind_capability!(PrefixedEcho => dyn Echo)],
    factory: prefixed_echo_factory,
};
