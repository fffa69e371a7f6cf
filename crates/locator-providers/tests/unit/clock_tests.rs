//! Tests for clock services

use locator_domain::{Error, Service};
use locator_domain::ports::Clock;
use locator_providers::{FixedClock, SystemClock};
use serde_json::json;

#[test]
fn test_fixed_clock_is_frozen() {
    let clock = FixedClock::new(1_700_000_000_000);
    assert_eq!(clock.now_millis(), 1_700_000_000_000);
    assert_eq!(clock.now_millis(), 1_700_000_000_000);
    assert_eq!(clock.settings(), json!({ "millis": 1_700_000_000_000_u64 }));
}

#[test]
fn test_fixed_clock_from_settings() {
    let service = FixedClock::default()
        .descriptor()
        .instantiate(&json!({ "millis": 42 }))
        .expect("factory");
    let clock = service
        .downcast_ref::<FixedClock>()
        .expect("factory builds a FixedClock");
    assert_eq!(clock.now_millis(), 42);
}

#[test]
fn test_system_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock::new().now_millis() > 1_577_836_800_000);
}

#[test]
fn test_fixed_clock_rejects_unstorable_instant() {
    let descriptor = FixedClock::default().descriptor();

    let err = descriptor
        .instantiate(&json!({ "millis": u64::MAX }))
        .unwrap_err();
    assert!(matches!(err, Error::ServiceConstruction { .. }));

    let largest = descriptor
        .instantiate(&json!({ "millis": i64::MAX }))
        .expect("largest signed instant is accepted");
    assert_eq!(largest.settings(), json!({ "millis": i64::MAX }));
}
