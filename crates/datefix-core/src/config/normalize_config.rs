//! Normalization pass configuration.

use serde::{Deserialize, Serialize};

use crate::tables::TableDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Tables to process, in order. Empty means every supported table.
    pub tables: Vec<String>,
    /// Roll back each pass instead of committing it.
    pub dry_run: Option<bool>,
}

impl NormalizeConfig {
    /// Configured tables, or all of `TABLES` in declaration order.
    pub fn effective_tables(&self) -> Vec<String> {
        if self.tables.is_empty() {
            TableDescriptor::names().map(str::to_string).collect()
        } else {
            self.tables.clone()
        }
    }

    pub fn effective_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }
}
