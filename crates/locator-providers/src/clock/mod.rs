//! Clock Service Implementations
//!
//! | Service | Type name | Description |
//! |---------|-----------|-------------|
//! | [`SystemClock`] | `locator.providers.SystemClock` | Reads the system time |
//! | [`FixedClock`] | `locator.providers.FixedClock` | Always reports the same instant |

pub mod fixed;
pub mod system;

pub use fixed::{FixedClock, FixedClockSettings};
pub use system::SystemClock;
