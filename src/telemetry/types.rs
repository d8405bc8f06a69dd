//! Telemetry event record and boundary validation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One submitted telemetry event
///
/// Constructed per request, serialized as a single log line, then
/// discarded. Never persisted as a queryable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// Non-empty event name
    pub event: String,
    /// Arbitrary JSON detail payload (may be empty)
    pub details: Map<String, Value>,
}

/// Validate a raw request body as a TelemetryEvent
///
/// Rejects when `event` is missing, not a string, or empty; when `details`
/// is missing or not an object; or when any extra field is present.
pub fn validate_telemetry(body: &[u8]) -> Result<TelemetryEvent, String> {
    let value: Value = serde_json::from_slice(body).map_err(|e| format!("invalid JSON: {}", e))?;
    let obj = value
        .as_object()
        .ok_or_else(|| "payload must be a JSON object".to_string())?;

    for key in obj.keys() {
        if key != "event" && key != "details" {
            return Err(format!("unrecognized field: {}", key));
        }
    }

    let event = obj
        .get("event")
        .ok_or_else(|| "missing field: event".to_string())?
        .as_str()
        .ok_or_else(|| "event must be a string".to_string())?;
    if event.is_empty() {
        return Err("event must not be empty".to_string());
    }

    let details = obj
        .get("details")
        .ok_or_else(|| "missing field: details".to_string())?
        .as_object()
        .ok_or_else(|| "details must be an object".to_string())?;

    Ok(TelemetryEvent {
        event: event.to_string(),
        details: details.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_event_with_details() {
        let ev = validate_telemetry(br#"{"event": "test_event", "details": {"foo": "bar"}}"#)
            .unwrap();
        assert_eq!(ev.event, "test_event");
        assert_eq!(ev.details.get("foo").unwrap(), "bar");
    }

    #[test]
    fn test_validate_accepts_empty_details() {
        let ev = validate_telemetry(br#"{"event": "wizard_opened", "details": {}}"#).unwrap();
        assert!(ev.details.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_event() {
        assert!(validate_telemetry(br#"{"event": "", "details": {}}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_non_string_event() {
        assert!(validate_telemetry(br#"{"event": 42, "details": {}}"#).is_err());
        assert!(validate_telemetry(br#"{"event": null, "details": {}}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(validate_telemetry(br#"{"event": "x"}"#).is_err());
        assert!(validate_telemetry(br#"{"details": {}}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_non_object_details() {
        assert!(validate_telemetry(br#"{"event": "x", "details": "nope"}"#).is_err());
        assert!(validate_telemetry(br#"{"event": "x", "details": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_extra_fields() {
        let err = validate_telemetry(br#"{"event": "x", "details": {}, "user": "eve"}"#)
            .unwrap_err();
        assert!(err.contains("user"));
    }

    #[test]
    fn test_serializes_to_single_line() {
        let ev = validate_telemetry(br#"{"event": "x", "details": {"a": 1}}"#).unwrap();
        let line = serde_json::to_string(&ev).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"event\""));
        assert!(line.contains("\"details\""));
    }
}
