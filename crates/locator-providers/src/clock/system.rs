//! System clock service

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use locator_application::catalog::SERVICE_TYPES;
use locator_domain::ports::Clock;
use locator_domain::{Service, ServiceDescriptor, bind_capability};

use crate::constants::SYSTEM_CLOCK_TYPE;

/// Clock backed by [`SystemTime`]
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // A clock set before the epoch reads as zero
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

impl Service for SystemClock {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &SYSTEM_CLOCK
    }
}

#[linkme::distributed_slice(SERVICE_TYPES)]
static SYSTEM_CLOCK: ServiceDescriptor = ServiceDescriptor {
    type_name: SYSTEM_CLOCK_TYPE,
    description: "Wall-clock time from the operating system",
    capabilities: &[bind_capability!(SystemClock => dyn Clock)],
    factory: |_| Ok(Arc::new(SystemClock::new())),
};
