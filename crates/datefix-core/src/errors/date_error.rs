//! Date-fragment errors.

use super::error_code::{self, ErrorCode};

/// A stored value that cannot be read as a two-field date fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("row {id} has no date value")]
    Missing { id: i64 },

    #[error("row {id} holds a {kind} value, expected text")]
    NotText { id: i64, kind: &'static str },

    #[error("row {id} holds text that is not valid UTF-8")]
    NotUtf8 { id: i64 },

    #[error("expected at least two '-'-separated fields in {raw:?}, found {found}")]
    FieldCount { raw: String, found: usize },
}

impl ErrorCode for DateError {
    fn error_code(&self) -> &'static str {
        error_code::DATE_ERROR
    }
}
