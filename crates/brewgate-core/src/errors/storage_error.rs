//! Errors raised by key-value persistence backends.

use super::error_code::{self, BrewgateErrorCode};

/// Errors that can occur in a key-value storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Database busy (another operation in progress)")]
    DbBusy,

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("Backend unavailable: {reason}")]
    Unavailable { reason: String },
}

impl BrewgateErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DbBusy => error_code::DB_BUSY,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::LockPoisoned => error_code::STORAGE_LOCK_POISONED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
