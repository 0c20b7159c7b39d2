//! `HttpPaymentVerifier`: blocking client for `POST /api/verify-payment`.

use tracing::{debug, warn};

use crate::config::CheckoutConfig;
use crate::errors::checkout_error::{CheckoutError, CheckoutResult};

use super::verifier::{IPaymentVerifier, VerificationOutcome, VerifyPaymentRequest};

pub struct HttpPaymentVerifier {
    verify_url: String,
    http_client: reqwest::blocking::Client,
}

impl HttpPaymentVerifier {
    /// Build a verifier for the configured payment backend.
    pub fn new(config: &CheckoutConfig) -> CheckoutResult<Self> {
        let base = config.effective_api_base_url();
        if base.trim().is_empty() {
            return Err(CheckoutError::InvalidInput {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }

        let http_client = reqwest::blocking::Client::builder()
            .connect_timeout(config.effective_connect_timeout())
            .timeout(config.effective_request_timeout())
            .build()
            .map_err(|error| CheckoutError::Http {
                message: error.to_string(),
            })?;

        Ok(Self {
            verify_url: config.verify_url(),
            http_client,
        })
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

impl IPaymentVerifier for HttpPaymentVerifier {
    fn verify_payment(&self, session_id: &str) -> CheckoutResult<VerificationOutcome> {
        if session_id.trim().is_empty() {
            return Err(CheckoutError::InvalidInput {
                field: "session_id",
                reason: "must not be empty".to_string(),
            });
        }

        debug!(url = %self.verify_url, "Verifying checkout session");
        let response = self
            .http_client
            .post(&self.verify_url)
            .json(&VerifyPaymentRequest {
                session_id: session_id.to_string(),
            })
            .send()
            .map_err(|error| CheckoutError::Http {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "Payment verification rejected");
            return Err(CheckoutError::VerificationFailed {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<VerificationOutcome>()
            .map_err(|error| CheckoutError::Decode {
                message: error.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        let config = CheckoutConfig {
            api_base_url: Some("https://pay.example/".into()),
            ..Default::default()
        };
        let verifier = HttpPaymentVerifier::new(&config).unwrap();
        assert_eq!(verifier.verify_url(), "https://pay.example/api/verify-payment");
    }

    #[test]
    fn rejects_blank_base_url() {
        let config = CheckoutConfig {
            api_base_url: Some("  ".into()),
            ..Default::default()
        };
        assert!(matches!(
            HttpPaymentVerifier::new(&config),
            Err(CheckoutError::InvalidInput { field: "api_base_url", .. })
        ));
    }

    #[test]
    fn blank_session_is_rejected_before_any_request() {
        let verifier = HttpPaymentVerifier::new(&CheckoutConfig::default()).unwrap();
        assert!(matches!(
            verifier.verify_payment(""),
            Err(CheckoutError::InvalidInput { field: "session_id", .. })
        ));
    }
}
