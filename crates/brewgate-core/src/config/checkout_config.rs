//! Checkout-return and payment verification configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_VERIFY_PATH: &str = "/api/verify-payment";
pub const DEFAULT_SESSION_PARAM: &str = "session_id";
pub const DEFAULT_GATE_PATH: &str = "/exclusive";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Payment backend base URL. Default: "http://localhost:3001".
    pub api_base_url: Option<String>,
    /// Verification endpoint path. Default: "/api/verify-payment".
    pub verify_path: Option<String>,
    /// Query parameter carrying the checkout session id. Default: "session_id".
    pub session_param: Option<String>,
    /// Path of the gated page, used as the post-verification redirect.
    pub gate_path: Option<String>,
    /// Connect timeout in seconds. Default: 10.
    pub connect_timeout_secs: Option<u64>,
    /// Overall request timeout in seconds. Default: 30.
    pub request_timeout_secs: Option<u64>,
}

impl CheckoutConfig {
    pub fn effective_api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn effective_verify_path(&self) -> &str {
        self.verify_path.as_deref().unwrap_or(DEFAULT_VERIFY_PATH)
    }

    pub fn effective_session_param(&self) -> &str {
        self.session_param.as_deref().unwrap_or(DEFAULT_SESSION_PARAM)
    }

    pub fn effective_gate_path(&self) -> &str {
        self.gate_path.as_deref().unwrap_or(DEFAULT_GATE_PATH)
    }

    pub fn effective_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.unwrap_or(10))
    }

    pub fn effective_request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(30))
    }

    /// Full verification endpoint URL, tolerant of trailing/leading slashes.
    pub fn verify_url(&self) -> String {
        let base = self.effective_api_base_url().trim_end_matches('/');
        let path = self.effective_verify_path().trim_start_matches('/');
        format!("{base}/{path}")
    }
}
