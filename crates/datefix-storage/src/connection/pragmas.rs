//! PRAGMA configuration applied to the connection.
//!
//! 5s busy_timeout, foreign_keys ON. Journal mode and auto_vacuum are left
//! as the owning application configured them.

use datefix_core::errors::StorageError;
use rusqlite::Connection;

pub const BUSY_TIMEOUT_MS: i64 = 5000;

pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "
        PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};
        PRAGMA foreign_keys = ON;
        "
    ))
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply pragmas: {e}"),
    })
}
