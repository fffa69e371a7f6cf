//! Echo Service Implementations
//!
//! | Service | Type name | Description |
//! |---------|-----------|-------------|
//! | [`ConsoleEcho`] | `locator.providers.ConsoleEcho` | Logs and returns the message |
//! | [`PrefixedEcho`] | `locator.providers.PrefixedEcho` | Prepends a configured prefix |

pub mod console;
pub mod prefixed;

pub use console::ConsoleEcho;
pub use prefixed::{PrefixedEcho, PrefixedEchoSettings};
