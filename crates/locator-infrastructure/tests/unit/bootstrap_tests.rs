//! Bootstrap tests

use std::sync::Arc;

use locator_domain::ports::Echo;
use locator_domain::{Error, ServiceConfiguration};
use locator_infrastructure::config::{AppConfig, ServicesConfig};
use locator_infrastructure::init_app;
use locator_infrastructure::store::FileConfigurationStore;
use locator_providers::{ConsoleEcho, PrefixedEcho};
use tempfile::TempDir;

fn config_for(path: std::path::PathBuf) -> AppConfig {
    AppConfig {
        services: ServicesConfig { path, format: None },
        ..AppConfig::default()
    }
}

#[test]
fn test_missing_service_configuration() {
    let dir = TempDir::new().unwrap();
    let err = init_app(config_for(dir.path().join("services.toml"))).unwrap_err();
    assert!(matches!(err, Error::ConfigurationMissing { .. }));
}

#[test]
fn test_init_app_loads_registry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("services.toml");

    let mut services = ServiceConfiguration::new();
    services.push(Arc::new(PrefixedEcho::new("app: ")));
    services.push(Arc::new(ConsoleEcho::new()));
    FileConfigurationStore::new(&path).save(&services).unwrap();

    let context = init_app(config_for(path.clone())).unwrap();

    assert_eq!(context.store().path(), path.as_path());
    assert!(context.catalog().len() >= 5);

    let report = context.load_report();
    assert_eq!(report.registered, 1);
    assert_eq!(report.duplicates().count(), 1);

    let registry = context.registry();
    assert!(registry.is_loaded());
    assert_eq!(registry.resolve::<dyn Echo>().unwrap().echo("hi"), "app: hi");
}
