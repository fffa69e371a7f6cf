//! Persisted form of service configurations
//!
//! Implementations are stored as a tagged value: the service type name plus
//! the settings its factory needs. Capabilities are stored alongside so the
//! registry never has to re-derive type relationships when loading.
//!
//! ```toml
//! [[entries]]
//! capabilities = ["locator.Echo"]
//!
//! [entries.implementation]
//! type = "locator.providers.PrefixedEcho"
//! settings = { prefix = "> " }
//! ```

use serde::{Deserialize, Serialize};

use crate::capability::CapabilityId;

/// Persisted service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    /// Entries in registration order
    #[serde(default)]
    pub entries: Vec<EntryDocument>,
}

/// Persisted service entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryDocument {
    /// Capabilities claimed by the entry
    #[serde(default)]
    pub capabilities: Vec<CapabilityId>,

    /// Implementation, absent for an empty slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<ImplementationDocument>,
}

/// Tagged implementation: type discriminator plus settings payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationDocument {
    /// Service type name registered in the catalog
    #[serde(rename = "type")]
    pub type_name: String,

    /// Factory settings
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub settings: serde_json::Value,
}
