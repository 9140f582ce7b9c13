// Booking configuration
// Plain struct with defaults, optionally loaded from a JSON file

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

// Date rendering used for the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateLocale {
    #[default]
    EnUs,
    EnGb,
    De,
    Iso,
}

impl DateLocale {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateLocale::EnUs => "%-m/%-d/%Y",
            DateLocale::EnGb => "%d/%m/%Y",
            DateLocale::De => "%-d.%-m.%Y",
            DateLocale::Iso => "%Y-%m-%d",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub locale: DateLocale,
    pub hotel_name: String,
    // Prefix of the confirmation reference issued on proceed
    pub reference_prefix: String,
    // Artificial delay for the stub gateway, 0 disables it
    pub simulated_latency_ms: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            locale: DateLocale::EnUs,
            hotel_name: "Royella".to_string(),
            reference_prefix: "RYL".to_string(),
            simulated_latency_ms: 0,
        }
    }
}

impl BookingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BookingConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "reference_prefix",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(DateLocale::EnUs, "3/10/2025"; "#1 US")]
    #[test_case(DateLocale::EnGb, "10/03/2025"; "#2 GB")]
    #[test_case(DateLocale::De, "10.3.2025"; "#3 German")]
    #[test_case(DateLocale::Iso, "2025-03-10"; "#4 ISO")]
    fn test_locale_format(locale: DateLocale, expected: &str) {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(locale.format(date), expected);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BookingConfig::from_json_str(r#"{ "locale": "en-gb" }"#).unwrap();
        assert_eq!(config.locale, DateLocale::EnGb);
        assert_eq!(config.hotel_name, "Royella");
        assert_eq!(config.reference_prefix, "RYL");
        assert_eq!(config.simulated_latency_ms, 0);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let result = BookingConfig::from_json_str(r#"{ "reference_prefix": "  " }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "reference_prefix",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let result = BookingConfig::from_json_str("{ locale: ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = BookingConfig::from_file("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
