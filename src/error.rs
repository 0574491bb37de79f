use thiserror::Error;

/// Failure to turn a config document into a working [`TicketCleaner`](crate::TicketCleaner).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read cleaner config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cleaner config is not valid JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[cfg(feature = "toml_config")]
    #[error("cleaner config is not valid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("audit word or action verb list does not compile: {0}")]
    WordList(#[from] regex::Error),
    #[error("cleaner config must be a .json or .toml file")]
    UnsupportedFormat,
    #[error("TOML cleaner configs need the 'toml_config' feature")]
    TomlNotEnabled,
}
