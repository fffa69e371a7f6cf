//! Shared helpers for provider factories

use serde::de::DeserializeOwned;

/// Parse factory settings, treating `null` as the default settings
pub fn parse_settings<T>(settings: &serde_json::Value) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    if settings.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(settings.clone()).map_err(|e| format!("invalid settings: {e}"))
}

/// Serialize settings back into their persisted form
pub fn settings_value<T: serde::Serialize>(settings: &T) -> serde_json::Value {
    serde_json::to_value(settings).unwrap_or(serde_json::Value::Null)
}
