//! Connection management: one connection, used sequentially.

pub mod pragmas;

use std::path::{Path, PathBuf};

use datefix_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

use self::pragmas::apply_pragmas;
use crate::to_storage_err;

/// The database being normalized. Dropping it closes the connection.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open an existing database file and apply pragmas.
    ///
    /// The file must already exist: opening a missing path would create an
    /// empty database with none of the tables to normalize.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.is_file() {
            return Err(StorageError::DatabaseNotFound {
                path: path.display().to_string(),
            });
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| to_storage_err("open database", e))?;
        apply_pragmas(&conn)?;

        tracing::debug!(path = %path.display(), "opened database");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn =
            Connection::open_in_memory().map_err(|e| to_storage_err("open in-memory", e))?;
        apply_pragmas(&conn)?;
        Ok(Self { conn, path: None })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Mutable access, needed to open transactions.
    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Get the database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `PRAGMA integrity_check`. Returns true if the database is healthy.
    pub fn check_integrity(&self) -> Result<bool, StorageError> {
        Ok(integrity_report(&self.conn)? == "ok")
    }

    /// Fail with `CorruptionDetected` unless the integrity check passes.
    pub fn ensure_integrity(&self) -> Result<(), StorageError> {
        let report = integrity_report(&self.conn)?;
        if report == "ok" {
            Ok(())
        } else {
            Err(StorageError::CorruptionDetected { details: report })
        }
    }
}

fn integrity_report(conn: &Connection) -> Result<String, StorageError> {
    conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(|e| to_storage_err("integrity check", e))
}
