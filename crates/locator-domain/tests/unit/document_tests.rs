//! Unit tests for the persisted document format

use locator_domain::{CapabilityId, ConfigurationDocument};

#[test]
fn test_document_parses_tagged_implementation() {
    let json = r#"{
        "entries": [
            {
                "capabilities": ["test.Bar"],
                "implementation": { "type": "test.Beta", "settings": { "value": 3 } }
            },
            { "capabilities": [] }
        ]
    }"#;

    let document: ConfigurationDocument = serde_json::from_str(json).expect("valid document");
    assert_eq!(document.entries.len(), 2);

    let implementation = document.entries[0]
        .implementation
        .as_ref()
        .expect("implementation");
    assert_eq!(implementation.type_name, "test.Beta");
    assert_eq!(implementation.settings["value"], 3);
    assert_eq!(
        document.entries[0].capabilities,
        vec![CapabilityId::new("test.Bar")]
    );
    assert!(document.entries[1].implementation.is_none());
}

#[test]
fn test_document_omits_null_settings() {
    let json = r#"{ "entries": [ { "capabilities": ["test.Foo"], "implementation": { "type": "test.Alpha" } } ] }"#;
    let document: ConfigurationDocument = serde_json::from_str(json).expect("valid document");

    let serialized = serde_json::to_string(&document).expect("serialize");
    assert!(!serialized.contains("settings"));
}

#[test]
fn test_empty_document_defaults() {
    let document: ConfigurationDocument = serde_json::from_str("{}").expect("valid document");
    assert!(document.entries.is_empty());
}
