//! Errors of a normalization run.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, DateError, StorageError};

/// Errors that can abort a normalization run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Date error in {table} row {id}: {source}")]
    Row {
        table: &'static str,
        id: i64,
        #[source]
        source: DateError,
    },
}

impl ErrorCode for NormalizeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Row { .. } => error_code::DATE_ERROR,
        }
    }
}
