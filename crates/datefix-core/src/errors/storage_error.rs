//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("database not found: {path}")]
    DatabaseNotFound { path: String },

    #[error("database corruption detected: {details}")]
    CorruptionDetected { details: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::DatabaseNotFound { .. } => error_code::DB_NOT_FOUND,
            Self::CorruptionDetected { .. } => error_code::DB_CORRUPT,
        }
    }
}
