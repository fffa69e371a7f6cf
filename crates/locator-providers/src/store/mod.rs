//! Key-Value Store Implementations
//!
//! | Service | Type name | Capabilities |
//! |---------|-----------|--------------|
//! | [`MemoryStore`] | `locator.providers.MemoryStore` | `KeyValueStore`, `KeyInventory` |

#[cfg(feature = "store-memory")]
pub mod memory;

#[cfg(feature = "store-memory")]
pub use memory::{MemoryStore, MemoryStoreSettings};
