//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::ui::OutputMode;
use crate::wizard::PayloadFormat;

/// Root of `stepform.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub settings: Settings,
}

/// Presentation settings. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub output: OutputMode,

    /// Serialization of the submitted payload: json, yaml
    pub payload_format: PayloadFormat,

    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputMode::Normal,
            payload_format: PayloadFormat::Json,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: FormConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, FormConfig::default());
        assert!(config.settings.color);
    }

    #[test]
    fn partial_settings_keep_other_defaults() {
        let yaml = "settings:\n  payload_format: yaml\n";
        let config: FormConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings.payload_format, PayloadFormat::Yaml);
        assert_eq!(config.settings.output, OutputMode::Normal);
    }

    #[test]
    fn parses_all_settings() {
        let yaml = r#"
settings:
  output: quiet
  payload_format: json
  color: false
"#;
        let config: FormConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings.output, OutputMode::Quiet);
        assert!(!config.settings.color);
    }

    #[test]
    fn rejects_unknown_output_mode() {
        let yaml = "settings:\n  output: loud\n";
        assert!(serde_yaml::from_str::<FormConfig>(yaml).is_err());
    }
}
