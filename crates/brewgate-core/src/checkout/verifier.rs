//! `IPaymentVerifier`: exchange a checkout session id for an access token.
//!
//! Implemented by the payment backend client. The entitlement store never
//! sees the session id; it only receives a successful `access_token`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::checkout_error::CheckoutResult;

/// Request body sent to the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub session_id: String,
}

/// `{ "success": bool, "accessToken"?: string }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl VerificationOutcome {
    pub fn granted(token: impl Into<String>) -> Self {
        Self {
            success: true,
            access_token: Some(token.into()),
        }
    }

    pub fn denied() -> Self {
        Self {
            success: false,
            access_token: None,
        }
    }

    /// The token, only when the backend reported success and sent one.
    pub fn usable_token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}

pub trait IPaymentVerifier: Send + Sync {
    fn verify_payment(&self, session_id: &str) -> CheckoutResult<VerificationOutcome>;

    /// Verifier name for logging.
    fn name(&self) -> &'static str;
}

impl<T: IPaymentVerifier + ?Sized> IPaymentVerifier for Arc<T> {
    fn verify_payment(&self, session_id: &str) -> CheckoutResult<VerificationOutcome> {
        (**self).verify_payment(session_id)
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
