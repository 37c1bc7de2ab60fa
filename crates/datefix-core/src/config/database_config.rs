//! Database location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE: &str = "budget.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite file. Default: `budget.db`.
    pub path: Option<String>,
}

impl DatabaseConfig {
    pub fn effective_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_DATABASE))
    }
}
