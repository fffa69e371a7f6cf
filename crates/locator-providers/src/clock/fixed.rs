//! Fixed clock service
//!
//! Reports a configured instant forever. Useful for reproducible runs.

use std::sync::Arc;

use locator_application::catalog::SERVICE_TYPES;
use locator_domain::ports::Clock;
use locator_domain::{Service, ServiceDescriptor, bind_capability};
use serde::{Deserialize, Serialize};

use crate::constants::{FIXED_CLOCK_TYPE, MAX_FIXED_CLOCK_MILLIS};
use crate::utils::{parse_settings, settings_value};

/// Persisted settings of [`FixedClock`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixedClockSettings {
    /// Milliseconds since the Unix epoch
    pub millis: u64,
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    settings: FixedClockSettings,
}

impl FixedClock {
    /// Create a clock frozen at `millis`
    pub fn new(millis: u64) -> Self {
        Self {
            settings: FixedClockSettings { millis },
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.settings.millis
    }
}

impl Service for FixedClock {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &FIXED_CLOCK
    }

    fn settings(&self) -> serde_json::Value {
        settings_value(&self.settings)
    }
}

#[linkme::distributed_slice(SERVICE_TYPES)]
static FIXED_CLOCK: ServiceDescriptor = ServiceDescriptor {
    type_name: FIXED_CLOCK_TYPE,
    description: "Clock frozen at a configured instant",
    capabilities: &[bind_capability!(FixedClock => dyn Clock)],
    factory: |settings| {
        let settings: FixedClockSettings = parse_settings(settings)?;
        if settings.millis > MAX_FIXED_CLOCK_MILLIS {
            return Err(format!(
                "millis {} exceeds the largest storable instant {MAX_FIXED_CLOCK_MILLIS}",
                settings.millis
            ));
        }
        Ok(Arc::new(FixedClock { settings }))
    },
};
