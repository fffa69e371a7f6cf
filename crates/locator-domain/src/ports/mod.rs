//! Capability ports
//!
//! Capability traits consumed by application components. Implementations live
//! in the providers crate and are selected through the service configuration.

pub mod clock;
pub mod echo;
pub mod store;

pub use clock::Clock;
pub use echo::Echo;
pub use store::{KeyInventory, KeyValueStore};
