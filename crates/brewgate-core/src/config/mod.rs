pub mod checkout_config;
pub mod entitlement_config;
pub mod logging_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use checkout_config::CheckoutConfig;
pub use entitlement_config::EntitlementConfig;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BrewgateConfig {
    pub entitlement: EntitlementConfig,
    pub checkout: CheckoutConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl BrewgateConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(hours) = self.entitlement.validity_hours {
            if !hours.is_finite() || hours <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: "entitlement.validity_hours",
                    reason: format!("must be a positive number, got {hours}"),
                });
            }
        }
        let named = [
            ("entitlement.storage_key", &self.entitlement.storage_key),
            ("checkout.api_base_url", &self.checkout.api_base_url),
            ("checkout.verify_path", &self.checkout.verify_path),
            ("checkout.session_param", &self.checkout.session_param),
            ("checkout.gate_path", &self.checkout.gate_path),
        ];
        for (key, value) in named {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
