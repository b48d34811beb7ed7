//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::{ConfigError, CreepageResult};
use crate::ipc2221::Classification;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Calculation settings.
    #[serde(default)]
    pub calculation: CalculationConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.calculation.classification() {
            return Err(ConfigError::ValidationError {
                message: format!("calculation.default_classification: {e}"),
            });
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.output.format.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid output format '{}'. Must be one of: text, json",
                    self.output.format
                ),
            });
        }

        Ok(())
    }
}

/// Calculation defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationConfig {
    /// Classification used when none is given on the command line,
    /// as an ordinal ("2") or code ("B2").
    /// Default: "B2"
    #[serde(default = "default_classification")]
    pub default_classification: String,
}

impl CalculationConfig {
    /// Parses the configured default classification.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not name a classification.
    pub fn classification(&self) -> CreepageResult<Classification> {
        self.default_classification.parse()
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            default_classification: default_classification(),
        }
    }
}

fn default_classification() -> String {
    Classification::B2.code().to_string()
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl OutputConfig {
    /// Returns true when results should be printed as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r"{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.calculation.classification(), Ok(Classification::B2));
        assert!(!config.output.is_json());
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "_comment": "Test config",
            "calculation": {
                "default_classification": "a7"
            },
            "output": {
                "format": "json"
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.calculation.classification(), Ok(Classification::A7));
        assert!(config.output.is_json());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn ordinal_default_classification() {
        let json = r#"{ "calculation": { "default_classification": "4" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.calculation.classification(), Ok(Classification::B4));
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn reject_invalid_classification() {
        let json = r#"{
            "calculation": {
                "default_classification": "B9"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("B9"));
    }

    #[test]
    fn reject_invalid_format() {
        let json = r#"{ "output": { "format": "xml" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{
            "unknown_field": "value"
        }"#;

        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
