//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Service Locator
#[derive(Error, Debug)]
pub enum Error {
    /// No service configuration could be obtained from the loader
    #[error("Service configuration missing: {message}")]
    ConfigurationMissing {
        /// Why the configuration could not be obtained
        message: String,
    },

    /// Resolution attempted before the registry finished loading
    #[error("Service registry not loaded (requested capability '{capability}')")]
    NotLoaded {
        /// The capability that was requested
        capability: String,
    },

    /// Capability has no registered implementation
    #[error("No implementation registered for capability '{capability}'")]
    NotFound {
        /// The capability that was requested
        capability: String,
    },

    /// Authoring-time mutation with an invalid entry index
    #[error("Entry index {index} out of range (configuration has {len} entries)")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of entries in the configuration
        len: usize,
    },

    /// Stored implementation is not of the requested capability type.
    ///
    /// Only reachable when two capability traits declare the same identifier.
    #[error("Capability '{capability}' is bound to a different trait type")]
    CapabilityMismatch {
        /// The conflicting capability identifier
        capability: String,
    },

    /// Service type name not present in the catalog
    #[error("Unknown service type '{type_name}'")]
    UnknownServiceType {
        /// The requested type name
        type_name: String,
    },

    /// Service factory rejected its settings
    #[error("Failed to construct service '{type_name}': {message}")]
    ServiceConstruction {
        /// The service type being constructed
        type_name: String,
        /// Factory error message
        message: String,
    },

    /// Configuration-related error (application settings)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Document (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Registry error creation methods
impl Error {
    /// Create a configuration missing error
    pub fn configuration_missing<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationMissing {
            message: message.into(),
        }
    }

    /// Create a not loaded error
    pub fn not_loaded<S: Into<String>>(capability: S) -> Self {
        Self::NotLoaded {
            capability: capability.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(capability: S) -> Self {
        Self::NotFound {
            capability: capability.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a capability mismatch error
    pub fn capability_mismatch<S: Into<String>>(capability: S) -> Self {
        Self::CapabilityMismatch {
            capability: capability.into(),
        }
    }
}

// Catalog error creation methods
impl Error {
    /// Create an unknown service type error
    pub fn unknown_service_type<S: Into<String>>(type_name: S) -> Self {
        Self::UnknownServiceType {
            type_name: type_name.into(),
        }
    }

    /// Create a service construction error
    pub fn service_construction<S: Into<String>, M: Into<String>>(
        type_name: S,
        message: M,
    ) -> Self {
        Self::ServiceConstruction {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Whether the caller can recover by retrying later or supplying data
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing { .. } | Self::NotLoaded { .. } | Self::NotFound { .. }
        )
    }
}
