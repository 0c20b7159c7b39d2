//! Errors surfaced by `EntitlementStore::set`.
//!
//! Reads and clears never error; they degrade to "no access".

use super::error_code::{self, BrewgateErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum EntitlementError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Failed to serialize access record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl BrewgateErrorCode for EntitlementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::Storage(e) => e.error_code(),
        }
    }
}

pub type EntitlementResult<T> = Result<T, EntitlementError>;
