//! Configuration loader tests

use std::path::PathBuf;

use locator_domain::Error;
use locator_infrastructure::config::{AppConfig, ConfigLoader, DocumentFormat, ServicesConfig};
use locator_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SERVICES_PATH};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert_eq!(config.services.path, PathBuf::from(DEFAULT_SERVICES_PATH));
    assert_eq!(config.services.resolved_format(), DocumentFormat::Toml);
}

#[test]
fn test_load_from_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locator.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "debug"

[services]
path = "conf/services.json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.services.path, PathBuf::from("conf/services.json"));
    assert_eq!(config.services.resolved_format(), DocumentFormat::Json);
}

#[test]
fn test_missing_explicit_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locator.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locator.toml");
    std::fs::write(&path, "[logging\n").unwrap();

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.logging.json_format = true;
    config.services = ServicesConfig {
        path: PathBuf::from("elsewhere.toml"),
        format: Some(DocumentFormat::Json),
    };

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let reloaded = loader.load().unwrap();

    assert_eq!(reloaded, config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_explicit_format_wins_over_extension() {
    let services = ServicesConfig {
        path: PathBuf::from("services.json"),
        format: Some(DocumentFormat::Toml),
    };
    assert_eq!(services.resolved_format(), DocumentFormat::Toml);
}

/// Run with: `cargo test -p locator-infrastructure --test unit -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locator.toml");
    std::fs::write(&path, "[services]\npath = \"from-file.toml\"\n").unwrap();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::set_var("LOCATOR_ENVTEST__SERVICES__PATH", "from-env.toml");
    }
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("LOCATOR_ENVTEST")
        .load();
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::remove_var("LOCATOR_ENVTEST__SERVICES__PATH");
    }

    assert_eq!(config.unwrap().services.path, PathBuf::from("from-env.toml"));
}
