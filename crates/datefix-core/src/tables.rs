//! Static table descriptors: which column of which table holds a date
//! fragment. Supporting another table is a new entry in `TABLES`.

use crate::errors::ConfigError;

/// Association between a table and its date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    pub table: &'static str,
    pub date_column: &'static str,
}

pub const TABLES: &[TableDescriptor] = &[
    TableDescriptor {
        table: "budget",
        date_column: "purchasedate",
    },
    TableDescriptor {
        table: "salary",
        date_column: "recordtime",
    },
];

impl TableDescriptor {
    /// Resolve a table name against `TABLES`.
    pub fn lookup(name: &str) -> Result<&'static TableDescriptor, ConfigError> {
        TABLES
            .iter()
            .find(|d| d.table == name)
            .ok_or_else(|| ConfigError::UnsupportedTable {
                name: name.to_string(),
            })
    }

    /// Names of every supported table, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        TABLES.iter().map(|d| d.table)
    }

    pub fn select_sql(&self) -> String {
        format!("SELECT id, {} FROM {}", self.date_column, self.table)
    }

    pub fn update_sql(&self) -> String {
        format!(
            "UPDATE {} SET {} = ?1 WHERE id = ?2",
            self.table, self.date_column
        )
    }
}
