//! Entitlement store configuration.

use serde::{Deserialize, Serialize};

/// Default persistence slot name.
pub const DEFAULT_STORAGE_KEY: &str = "exclusive_access";
/// Default validity window for a freshly stored access record.
pub const DEFAULT_VALIDITY_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntitlementConfig {
    /// Name of the single persistence slot. Default: "exclusive_access".
    pub storage_key: Option<String>,
    /// Hours an access record stays valid after being stored. Default: 24.
    pub validity_hours: Option<f64>,
}

impl EntitlementConfig {
    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn effective_validity_hours(&self) -> f64 {
        self.validity_hours.unwrap_or(DEFAULT_VALIDITY_HOURS)
    }
}
