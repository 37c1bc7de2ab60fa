//! SQLite access for datefix: connection handling and the per-table
//! normalization pass.

pub mod connection;
pub mod normalize;

pub use connection::Database;
pub use normalize::{normalize, plan, run_all, Correction, PassMode, PassReport};

use datefix_core::errors::StorageError;

/// Wrap a rusqlite failure with the operation that produced it.
pub(crate) fn to_storage_err(context: &str, e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: format!("{context}: {e}"),
    }
}
