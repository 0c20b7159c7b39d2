//! Configuration loading errors.

use super::error_code::{self, BrewgateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid config value {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

impl BrewgateErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
