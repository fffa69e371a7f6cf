//! Application bootstrap
//!
//! Composition root: discovers service types, loads the persisted service
//! configuration and builds the registry that is passed down to consumers.
//!
//! ```text
//! AppConfig → FileConfigurationStore → ServiceCatalog::materialize → ServiceRegistry::load
//!                                            ↑
//!                                    linkme SERVICE_TYPES
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config)?;
//! let echo = context.registry().resolve::<dyn Echo>()?;
//! ```

use std::sync::Arc;

use locator_application::{LoadReport, ServiceCatalog, ServiceRegistry};
use locator_domain::error::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::store::FileConfigurationStore;

/// Application context holding the loaded registry
#[derive(Debug)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    catalog: ServiceCatalog,
    store: FileConfigurationStore,
    registry: Arc<ServiceRegistry>,
    report: LoadReport,
}

impl AppContext {
    /// Service type catalog
    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Store the registry was loaded from
    pub fn store(&self) -> &FileConfigurationStore {
        &self.store
    }

    /// The loaded registry
    pub fn registry(&self) -> Arc<ServiceRegistry> {
        Arc::clone(&self.registry)
    }

    /// Outcome of the registry load
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }
}

/// Build the application context and load the registry.
///
/// Fails with `ConfigurationMissing` when the service configuration document
/// does not exist.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let catalog = ServiceCatalog::discover();
    let store = FileConfigurationStore::from_config(&config.services);
    let registry = Arc::new(ServiceRegistry::new());

    info!(
        path = %store.path().display(),
        types = catalog.len(),
        "Loading service registry"
    );
    let report = registry.load_from(&store.source(&catalog))?;

    Ok(AppContext {
        config: Arc::new(config),
        catalog,
        store,
        registry,
        report,
    })
}
