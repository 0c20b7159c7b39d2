//! Checkout-return and payment verification errors.

use super::error_code::{self, BrewgateErrorCode};
use super::EntitlementError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Payment verification rejected with status {status}: {message}")]
    VerificationFailed { status: u16, message: String },

    #[error("HTTP error: {message}")]
    Http { message: String },

    #[error("Could not decode verification response: {message}")]
    Decode { message: String },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Entitlement error: {0}")]
    Entitlement(#[from] EntitlementError),
}

impl BrewgateErrorCode for CheckoutError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::VerificationFailed { .. } => error_code::VERIFICATION_FAILED,
            Self::Http { .. } => error_code::HTTP_ERROR,
            Self::Decode { .. } => error_code::DECODE_ERROR,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Entitlement(e) => e.error_code(),
        }
    }
}

pub type CheckoutResult<T> = Result<T, CheckoutError>;
