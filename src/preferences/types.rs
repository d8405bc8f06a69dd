//! Preferences record and boundary validation

use serde::{Deserialize, Serialize};

/// UI theme choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The persisted two-field user settings record
///
/// Exactly these two fields exist; anything else in a payload is rejected
/// at the request boundary before it reaches the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preferences {
    /// Whether telemetry collection is enabled
    pub telemetry: bool,
    /// UI theme: "light" or "dark"
    pub theme: Theme,
}

/// Validate a raw request body as a Preferences record
///
/// Rejects when `telemetry` is not a boolean, `theme` is not exactly
/// "light" or "dark", either field is missing, or any extra field is
/// present. Runs at the request boundary; the store only ever sees
/// validated records.
pub fn validate_preferences(body: &[u8]) -> Result<Preferences, String> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| format!("invalid JSON: {}", e))?;
    let obj = value
        .as_object()
        .ok_or_else(|| "payload must be a JSON object".to_string())?;

    for key in obj.keys() {
        if key != "telemetry" && key != "theme" {
            return Err(format!("unrecognized field: {}", key));
        }
    }

    let telemetry = obj
        .get("telemetry")
        .ok_or_else(|| "missing field: telemetry".to_string())?
        .as_bool()
        .ok_or_else(|| "telemetry must be a boolean".to_string())?;

    let theme = match obj
        .get("theme")
        .ok_or_else(|| "missing field: theme".to_string())?
    {
        serde_json::Value::String(s) if s == "light" => Theme::Light,
        serde_json::Value::String(s) if s == "dark" => Theme::Dark,
        serde_json::Value::String(s) => {
            return Err(format!("theme must be \"light\" or \"dark\", got \"{}\"", s))
        }
        _ => return Err("theme must be a string".to_string()),
    };

    Ok(Preferences { telemetry, theme })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(!prefs.telemetry);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Preferences {
            telemetry: true,
            theme: Theme::Dark,
        })
        .unwrap();
        assert_eq!(json, r#"{"telemetry":true,"theme":"dark"}"#);
    }

    #[test]
    fn test_validate_accepts_both_themes() {
        let prefs = validate_preferences(br#"{"telemetry": true, "theme": "dark"}"#).unwrap();
        assert!(prefs.telemetry);
        assert_eq!(prefs.theme, Theme::Dark);

        let prefs = validate_preferences(br#"{"telemetry": false, "theme": "light"}"#).unwrap();
        assert!(!prefs.telemetry);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(validate_preferences(br#"{"theme": "light"}"#).is_err());
        assert!(validate_preferences(br#"{"telemetry": true}"#).is_err());
        assert!(validate_preferences(b"{}").is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_types() {
        assert!(validate_preferences(br#"{"telemetry": "yes", "theme": "light"}"#).is_err());
        assert!(validate_preferences(br#"{"telemetry": 1, "theme": "light"}"#).is_err());
        assert!(validate_preferences(br#"{"telemetry": true, "theme": 2}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_theme() {
        assert!(validate_preferences(br#"{"telemetry": true, "theme": "blue"}"#).is_err());
        assert!(validate_preferences(br#"{"telemetry": true, "theme": "Light"}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_extra_fields() {
        let body = br#"{"telemetry": true, "theme": "dark", "font_size": 12}"#;
        let err = validate_preferences(body).unwrap_err();
        assert!(err.contains("font_size"));
    }

    #[test]
    fn test_validate_rejects_non_objects() {
        assert!(validate_preferences(b"[]").is_err());
        assert!(validate_preferences(b"\"light\"").is_err());
        assert!(validate_preferences(b"not json at all").is_err());
        assert!(validate_preferences(b"").is_err());
    }
}
