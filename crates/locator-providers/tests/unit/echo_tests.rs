//! Tests for echo services

use locator_domain::Service;
use locator_domain::ports::Echo;
use locator_providers::constants::{DEFAULT_ECHO_PREFIX, PREFIXED_ECHO_TYPE};
use locator_providers::echo::PrefixedEchoSettings;
use locator_providers::{ConsoleEcho, PrefixedEcho};
use serde_json::json;

#[test]
fn test_console_echo_returns_message() {
    let echo = ConsoleEcho::new();
    assert_eq!(echo.echo("hello"), "hello");
    assert!(echo.settings().is_null());
}

#[test]
fn test_prefixed_echo_prepends_prefix() {
    let echo = PrefixedEcho::new("[x] ");
    assert_eq!(echo.echo("hello"), "[x] hello");
    assert_eq!(echo.settings(), json!({ "prefix": "[x] " }));
}

#[test]
fn test_prefixed_echo_default_prefix() {
    let echo = PrefixedEcho::default();
    assert_eq!(echo.prefix(), DEFAULT_ECHO_PREFIX);
}

#[test]
fn test_prefixed_echo_factory_round_trip() {
    let original = PrefixedEcho::new("#");
    let descriptor = original.descriptor();
    assert_eq!(descriptor.type_name, PREFIXED_ECHO_TYPE);

    let rebuilt = descriptor
        .instantiate(&original.settings())
        .expect("factory accepts its own settings");
    let settings: PrefixedEchoSettings =
        serde_json::from_value(rebuilt.settings()).expect("settings");
    assert_eq!(settings.prefix, "#");
}

#[test]
fn test_prefixed_echo_factory_rejects_bad_settings() {
    let descriptor = PrefixedEcho::default().descriptor();
    let err = descriptor
        .instantiate(&json!({ "prefix": 3 }))
        .unwrap_err();
    assert!(matches!(err, locator_domain::Error::ServiceConstruction { .. }));
}
