//! Domain constants

/// Identifier of the marker contract implemented by every service.
///
/// Never part of a derived capability set.
pub const MARKER_CAPABILITY: &str = "locator.Service";
