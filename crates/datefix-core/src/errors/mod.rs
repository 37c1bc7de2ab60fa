//! Error handling for datefix.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod date_error;
pub mod error_code;
pub mod normalize_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use date_error::DateError;
pub use error_code::ErrorCode;
pub use normalize_error::NormalizeError;
pub use storage_error::StorageError;
