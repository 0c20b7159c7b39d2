//! Checkout return: turning a post-payment redirect into an access record.
//!
//! ## Components
//! - **redirect**: `CheckoutReturn` event parsed from the return URL, and
//!   the success-page forward to the gated page
//! - **verifier**: `IPaymentVerifier`, the external verification contract
//! - **http_verifier**: `HttpPaymentVerifier`, blocking HTTP client for it
//! - **handler**: `CheckoutReturnHandler`: verify, then store the token

pub mod handler;
pub mod http_verifier;
pub mod redirect;
pub mod verifier;

pub use handler::{CheckoutOutcome, CheckoutReturnHandler};
pub use http_verifier::HttpPaymentVerifier;
pub use redirect::{success_redirect, CheckoutReturn};
pub use verifier::{IPaymentVerifier, VerificationOutcome, VerifyPaymentRequest};
