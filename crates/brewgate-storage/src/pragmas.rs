//! SQLite PRAGMA configuration. Must be applied on every connection
//! immediately after opening.

use rusqlite::Connection;

/// WAL + NORMAL sync for durable single-row writes, with a busy timeout so
/// two handles on one file wait instead of failing.
pub fn configure_connection(conn: &Connection, busy_timeout_ms: u64) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA temp_store = MEMORY;
        "
    ))
}
