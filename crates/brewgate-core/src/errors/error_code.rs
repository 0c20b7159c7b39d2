//! Stable error codes shared across crates.

/// Every brewgate error exposes a machine-readable code.
pub trait BrewgateErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const STORAGE_LOCK_POISONED: &str = "STORAGE_LOCK_POISONED";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const DB_BUSY: &str = "DB_BUSY";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const VERIFICATION_FAILED: &str = "VERIFICATION_FAILED";
pub const HTTP_ERROR: &str = "HTTP_ERROR";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
