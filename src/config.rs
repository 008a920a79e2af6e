//! Engine configuration.

use crate::core::NumericParsing;
use crate::presentation::PresentationConfig;
use serde::{Deserialize, Serialize};

/// Settings for one [`FormValidator`](crate::controller::FormValidator).
///
/// Every key is optional when loading from JSON.
///
/// ```rust
/// use formcheck::config::ValidatorConfig;
/// use formcheck::core::NumericParsing;
///
/// let config = ValidatorConfig::from_json(r#"{ "numeric_parsing": "strict" }"#).unwrap();
/// assert_eq!(config.numeric_parsing, NumericParsing::Strict);
/// assert_eq!(config.presentation.invalid_class, "is-invalid");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub numeric_parsing: NumericParsing,
    pub presentation: PresentationConfig,
}

impl ValidatorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = ValidatorConfig::from_json("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.numeric_parsing, NumericParsing::Permissive);
    }

    #[test]
    fn partial_presentation_keeps_other_defaults() {
        let config =
            ValidatorConfig::from_json(r#"{ "presentation": { "invalid_class": "bad" } }"#).unwrap();
        assert_eq!(config.presentation.invalid_class, "bad");
        assert_eq!(config.presentation.valid_class, "is-valid");
        assert_eq!(config.presentation.alert_role, "alert");
    }

    #[test]
    fn unknown_numeric_mode_is_rejected() {
        assert!(ValidatorConfig::from_json(r#"{ "numeric_parsing": "loose" }"#).is_err());
    }
}
