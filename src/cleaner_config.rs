use serde::{Deserialize, Serialize};
use std::{fmt::Display, fs, path::Path};

use crate::{scorer::DEFAULT_ACTION_VERBS, selector::DEFAULT_AUDIT_WORDS, ConfigError};

/// Tuning knobs for a [`TicketCleaner`](crate::TicketCleaner).
///
/// Every field may be left out of a config document; missing fields take the
/// built-in Portuguese vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Whole words that disqualify a sentence from being picked as the answer.
    #[serde(default = "default_audit_words")]
    pub audit_words: Vec<String>,
    /// Whole words that earn the quality score bonus.
    #[serde(default = "default_action_verbs")]
    pub action_verbs: Vec<String>,
    /// Flatten HTML markup before cleaning.
    #[serde(default)]
    pub strip_html: bool,
}

fn default_audit_words() -> Vec<String> {
    DEFAULT_AUDIT_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_action_verbs() -> Vec<String> {
    DEFAULT_ACTION_VERBS.iter().map(|w| w.to_string()).collect()
}

impl Default for CleanerConfig {
    fn default() -> Self {
        CleanerConfig {
            audit_words: default_audit_words(),
            action_verbs: default_action_verbs(),
            strip_html: false,
        }
    }
}

impl CleanerConfig {
    /// Loads a config from a `.json`/`.toml` file path, or parses `config`
    /// itself as inline JSON (then TOML, when enabled).
    pub fn from_config(config: &str) -> Result<CleanerConfig, ConfigError> {
        if Path::new(config).exists() {
            let config_content = fs::read_to_string(config)?;
            if config.ends_with(".json") {
                Ok(serde_json::from_str(&config_content)?)
            } else if config.ends_with(".toml") {
                #[cfg(feature = "toml_config")]
                {
                    Ok(toml::from_str(&config_content)?)
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(ConfigError::TomlNotEnabled)
                }
            } else {
                Err(ConfigError::UnsupportedFormat)
            }
        } else {
            serde_json::from_str(config).or_else(|json_err| {
                #[cfg(feature = "toml_config")]
                {
                    let _ = json_err;
                    toml::from_str(config).map_err(|e| e.into())
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(json_err.into())
                }
            })
        }
    }
}

impl Display for CleanerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_take_defaults() {
        let config = CleanerConfig::from_config(r#"{"strip_html": true}"#).unwrap();
        assert!(config.strip_html);
        assert_eq!(config.audit_words, default_audit_words());
        assert_eq!(config.action_verbs, default_action_verbs());
    }

    #[test]
    fn inline_json_overrides_vocabulary() {
        let config =
            CleanerConfig::from_config(r#"{"audit_words": ["encerrado"], "action_verbs": []}"#)
                .unwrap();
        assert_eq!(config.audit_words, vec!["encerrado".to_string()]);
        assert!(config.action_verbs.is_empty());
        assert!(!config.strip_html);
    }

    #[test]
    fn json_file_is_read() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"audit_words": ["fechado"]}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = CleanerConfig::from_config(&path).unwrap();
        assert_eq!(config.audit_words, vec!["fechado".to_string()]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err = CleanerConfig::from_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat));
    }

    #[cfg(feature = "toml_config")]
    #[test]
    fn inline_toml_when_enabled() {
        let config = CleanerConfig::from_config("audit_words = [\"fechado\"]\nstrip_html = true").unwrap();
        assert!(config.strip_html);
        assert_eq!(config.audit_words, vec!["fechado".to_string()]);
    }

    #[cfg(not(feature = "toml_config"))]
    #[test]
    fn toml_file_needs_feature() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err = CleanerConfig::from_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlNotEnabled));
    }

    #[test]
    fn display_is_json() {
        let shown = CleanerConfig::default().to_string();
        assert!(shown.starts_with('{'));
        assert!(shown.contains("\"strip_html\":false"));
    }
}
