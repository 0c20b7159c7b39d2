//! Error types for every brewgate layer.
//!
//! Each enum implements `BrewgateErrorCode` so callers can map failures to a
//! stable string code without matching on display text.

pub mod checkout_error;
pub mod config_error;
pub mod entitlement_error;
pub mod error_code;
pub mod storage_error;

pub use checkout_error::CheckoutError;
pub use config_error::ConfigError;
pub use entitlement_error::EntitlementError;
pub use error_code::BrewgateErrorCode;
pub use storage_error::StorageError;
