//! Test service types shared by the domain unit tests
//!
//! `Alpha` provides `Foo`, `Beta` provides `Bar`, `Both` provides `Foo` and
//! `Bar` and also binds the marker contract, which must never be derived.

use locator_domain::{Service, ServiceDescriptor, bind_capability, capability};
use std::sync::Arc;

pub trait Foo: Service {
    fn foo(&self) -> &'static str;
}
capability!(dyn Foo => "test.Foo");

pub trait Bar: Service {
    fn bar(&self) -> u32;
}
capability!(dyn Bar => "test.Bar");

#[derive(Debug)]
pub struct Alpha;

impl Foo for Alpha {
    fn foo(&self) -> &'static str {
        "alpha"
    }
}

pub static ALPHA: ServiceDescriptor = ServiceDescriptor {
    type_name: "test.Alpha",
    description: "Provides Foo",
    capabilities: &[bind_capability!(Alpha => dyn Foo)],
    factory: |_| Ok(Arc::new(Alpha)),
};

impl Service for Alpha {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &ALPHA
    }
}

#[derive(Debug)]
pub struct Beta {
    pub value: u32,
}

impl Bar for Beta {
    fn bar(&self) -> u32 {
        self.value
    }
}

pub static BETA: ServiceDescriptor = ServiceDescriptor {
    type_name: "test.Beta",
    description: "Provides Bar",
    capabilities: &[bind_capability!(Beta => dyn Bar)],
    factory: |settings| {
        let value = settings.get("value").and_then(serde_json::Value::as_u64);
        match value {
            Some(value) => Ok(Arc::new(Beta {
                value: u32::try_from(value).map_err(|e| e.to_string())?,
            })),
            None => Err("missing 'value'".to_string()),
        }
    },
};

impl Service for Beta {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &BETA
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::json!({ "value": self.value })
    }
}

#[derive(Debug)]
pub struct Both;

impl Foo for Both {
    fn foo(&self) -> &'static str {
        "both"
    }
}

impl Bar for Both {
    fn bar(&self) -> u32 {
        2
    }
}

pub static BOTH: ServiceDescriptor = ServiceDescriptor {
    type_name: "test.Both",
    description: "Provides Foo and Bar",
    capabilities: &[
        bind_capability!(Both => dyn Service),
        bind_capability!(Both => dyn Foo),
        bind_capability!(Both => dyn Bar),
    ],
    factory: |_| Ok(Arc::new(Both)),
};

impl Service for Both {
    fn descriptor(&self) -> &'static ServiceDescriptor {
        &BOTH
    }
}

pub fn alpha() -> Arc<dyn Service> {
    Arc::new(Alpha)
}

pub fn beta(value: u32) -> Arc<dyn Service> {
    Arc::new(Beta { value })
}

pub fn both() -> Arc<dyn Service> {
    Arc::new(Both)
}
