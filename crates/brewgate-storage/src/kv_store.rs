//! `SqliteKeyValueStorage`: `IKeyValueStorage` backed by one SQLite table.
//!
//! One connection behind a mutex; every operation is a single statement so
//! a value is always replaced whole. Two handles on the same file see each
//! other's writes with last-writer-wins and no further coordination.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use tracing::debug;

use brewgate_core::config::StorageConfig;
use brewgate_core::errors::StorageError;
use brewgate_core::traits::IKeyValueStorage;

use crate::migrations::run_migrations;
use crate::pragmas::configure_connection;

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

pub struct SqliteKeyValueStorage {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteKeyValueStorage {
    /// Open (creating if needed) a file-backed store at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT_MS)
    }

    pub fn open_with_timeout(path: &Path, busy_timeout_ms: u64) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::SqliteError {
                message: format!("Failed to create storage directory: {e}"),
            })?;
        }
        let conn = Connection::open(path).map_err(sqe)?;
        Self::init(conn, Some(path.to_path_buf()), busy_timeout_ms)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sqe)?;
        Self::init(conn, None, DEFAULT_BUSY_TIMEOUT_MS)
    }

    /// Open according to config: file-backed when `db_path` is set.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        match &config.db_path {
            Some(path) => Self::open_with_timeout(path, config.effective_busy_timeout_ms()),
            None => Self::open_in_memory(),
        }
    }

    fn init(
        mut conn: Connection,
        path: Option<PathBuf>,
        busy_timeout_ms: u64,
    ) -> Result<Self, StorageError> {
        configure_connection(&conn, busy_timeout_ms).map_err(sqe)?;
        let version = run_migrations(&mut conn)?;
        debug!(path = ?path, schema_version = version, "Opened kv_store");
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, StorageError> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
                .map_err(sqe)?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&conn)
    }
}

impl IKeyValueStorage for SqliteKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(sqe)
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().timestamp_millis()],
            )
            .map_err(sqe)?;
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])
                .map_err(sqe)?;
            Ok(())
        })
    }
}

// ─── Helper: StorageError from rusqlite ─────────────────────────────────────

fn sqe(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StorageError::DbBusy,
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
