//! Runtime settings shared by the prompt and the form.

use serde::{Deserialize, Serialize};

/// Caller settings.
///
/// The default is Gregorian mode (years before 1583 rejected) with coloured
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Accept any integer year instead of rejecting pre-Gregorian ones.
    pub proleptic: bool,
    /// Style result messages with terminal colours.
    pub color:     bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proleptic: false,
            color:     true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let settings = Settings::default();
        assert!(!settings.proleptic);
        assert!(settings.color);
    }

    #[test]
    fn test_serde_fills_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"proleptic":true}"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                proleptic: true,
                color:     true,
            }
        );

        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"proleptic":false,"color":true}"#);
    }
}
