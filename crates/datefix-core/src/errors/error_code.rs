//! Stable error codes reported by the binary.

/// Every error enum maps onto a stable code string so that failures can be
/// grepped out of logs independently of their message text.
pub trait ErrorCode {
    /// Returns the code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn display_with_code(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATE_ERROR: &str = "DATE_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_NOT_FOUND: &str = "DB_NOT_FOUND";
pub const DB_CORRUPT: &str = "DB_CORRUPT";
