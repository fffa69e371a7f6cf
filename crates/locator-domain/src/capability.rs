//! Capability identities
//!
//! A capability is a trait that consumers depend on. Each capability trait
//! object type carries a stable identifier through the [`Capability`] trait,
//! usually declared with the [`capability!`](crate::capability!) macro:
//!
//! ```
//! use locator_domain::{capability, Service};
//!
//! pub trait Greeter: Service {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! capability!(dyn Greeter => "example.Greeter");
//!
//! assert_eq!(
//!     locator_domain::CapabilityId::of::<dyn Greeter>().as_str(),
//!     "example.Greeter"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::constants::MARKER_CAPABILITY;

/// Compile-time binding between a capability type and its identifier
///
/// Implemented for trait object types (`dyn Trait`). The identifier must be
/// unique across the process and must not change between runs, since it is
/// persisted in service configurations.
pub trait Capability: 'static {
    /// Stable, globally unique capability name
    const ID: &'static str;
}

/// Stable name of a capability, used as the registry key space
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityId(String);

impl CapabilityId {
    /// Create an identifier from a raw name
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier declared by capability type `T`
    pub fn of<T: ?Sized + Capability>() -> Self {
        Self(T::ID.to_string())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the marker contract shared by every service
    pub fn is_marker(&self) -> bool {
        self.0 == MARKER_CAPABILITY
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CapabilityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CapabilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CapabilityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Declare the identifier of a capability trait object type
///
/// ```ignore
/// capability!(dyn Echo => "locator.Echo");
/// ```
#[macro_export]
macro_rules! capability {
    ($(#[$meta:meta])* $cap:ty => $id:literal) => {
        $(#[$meta])*
        impl $crate::capability::Capability for $cap {
            const ID: &'static str = $id;
        }
    };
}
