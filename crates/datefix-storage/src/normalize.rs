//! The per-table normalization pass.
//!
//! A pass reads every `(id, date)` pair of one table, computes all
//! corrections in memory, and only then writes them back inside a single
//! transaction. A malformed row therefore aborts the pass before anything
//! is written, and a failed update leaves the table untouched.

use datefix_core::errors::{DateError, NormalizeError};
use datefix_core::{parse_fragment, TableDescriptor};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::to_storage_err;

/// Whether a pass commits its updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassMode {
    #[default]
    Commit,
    /// Run every update, then roll back.
    DryRun,
}

/// One row's rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub id: i64,
    pub original: String,
    pub canonical: String,
    /// Neither field was four characters wide; see `FieldOrder::Ambiguous`.
    pub ambiguous: bool,
    /// A day (or further field) was discarded from the stored value.
    pub day_dropped: bool,
}

/// Outcome of one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub table: &'static str,
    pub rows_read: usize,
    pub rows_updated: usize,
    /// Ids of rows whose fragment had no four-character field.
    pub ambiguous: Vec<i64>,
    /// Ids of rows whose stored value had a day component that was dropped.
    pub days_dropped: Vec<i64>,
    pub dry_run: bool,
}

/// Compute the corrections for `table_name` without writing anything.
pub fn plan(conn: &Connection, table_name: &str) -> Result<Vec<Correction>, NormalizeError> {
    plan_for(conn, TableDescriptor::lookup(table_name)?)
}

fn plan_for(
    conn: &Connection,
    descriptor: &'static TableDescriptor,
) -> Result<Vec<Correction>, NormalizeError> {
    let rows = read_rows(conn, descriptor)?;

    let mut corrections = Vec::with_capacity(rows.len());
    for (id, raw) in rows {
        let raw = raw.map_err(|source| row_err(descriptor, id, source))?;
        let fragment = parse_fragment(&raw).map_err(|source| row_err(descriptor, id, source))?;
        let canonical = fragment.canonical();
        tracing::debug!(table = descriptor.table, id, from = %raw, to = %canonical, "planned correction");
        corrections.push(Correction {
            id,
            original: raw,
            canonical,
            ambiguous: fragment.is_ambiguous(),
            day_dropped: fragment.day_dropped(),
        });
    }
    Ok(corrections)
}

/// Normalize the date column of `table_name`.
///
/// Unknown tables fail before any query runs. All updates of the pass are
/// committed together, or (in `DryRun`) rolled back together.
pub fn normalize(
    conn: &mut Connection,
    table_name: &str,
    mode: PassMode,
) -> Result<PassReport, NormalizeError> {
    let descriptor = TableDescriptor::lookup(table_name)?;
    let corrections = plan_for(conn, descriptor)?;

    let mut ambiguous = Vec::new();
    for c in corrections.iter().filter(|c| c.ambiguous) {
        tracing::warn!(
            table = descriptor.table,
            id = c.id,
            value = %c.original,
            "no four-digit year in date fragment, read as year-month"
        );
        ambiguous.push(c.id);
    }

    let mut days_dropped = Vec::new();
    for c in corrections.iter().filter(|c| c.day_dropped) {
        tracing::warn!(
            table = descriptor.table,
            id = c.id,
            value = %c.original,
            "date fragment has more than two fields, day component dropped"
        );
        days_dropped.push(c.id);
    }

    let tx = conn
        .transaction()
        .map_err(|e| to_storage_err("begin transaction", e))?;
    let mut rows_updated = 0;
    {
        let mut stmt = tx
            .prepare(&descriptor.update_sql())
            .map_err(|e| to_storage_err("prepare update", e))?;
        for c in &corrections {
            rows_updated += stmt
                .execute(params![c.canonical, c.id])
                .map_err(|e| to_storage_err("update row", e))?;
        }
    }

    let dry_run = mode == PassMode::DryRun;
    if dry_run {
        tx.rollback().map_err(|e| to_storage_err("rollback", e))?;
    } else {
        tx.commit().map_err(|e| to_storage_err("commit", e))?;
    }

    let report = PassReport {
        table: descriptor.table,
        rows_read: corrections.len(),
        rows_updated,
        ambiguous,
        days_dropped,
        dry_run,
    };
    tracing::info!(
        table = report.table,
        rows_read = report.rows_read,
        rows_updated = report.rows_updated,
        ambiguous = report.ambiguous.len(),
        days_dropped = report.days_dropped.len(),
        dry_run,
        "normalized date column"
    );
    Ok(report)
}

/// Normalize each table in order, stopping at the first failure. Tables
/// processed before the failure stay committed.
pub fn run_all<S: AsRef<str>>(
    conn: &mut Connection,
    tables: &[S],
    mode: PassMode,
) -> Result<Vec<PassReport>, NormalizeError> {
    tables
        .iter()
        .map(|table| normalize(conn, table.as_ref(), mode))
        .collect()
}

type RawRow = (i64, Result<String, DateError>);

fn read_rows(conn: &Connection, descriptor: &TableDescriptor) -> Result<Vec<RawRow>, NormalizeError> {
    let mut stmt = conn
        .prepare(&descriptor.select_sql())
        .map_err(|e| to_storage_err("prepare select", e))?;
    let rows = stmt
        .query_map([], |row| {
            let id: i64 = row.get("id")?;
            let raw = match row.get_ref(descriptor.date_column)? {
                ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                    .map(str::to_string)
                    .map_err(|_| DateError::NotUtf8 { id }),
                ValueRef::Integer(i) => Ok(i.to_string()),
                ValueRef::Real(f) => Ok(f.to_string()),
                ValueRef::Null => Err(DateError::Missing { id }),
                ValueRef::Blob(_) => Err(DateError::NotText { id, kind: "blob" }),
            };
            Ok((id, raw))
        })
        .map_err(|e| to_storage_err("select rows", e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err("read row", e))?;
    Ok(rows)
}

fn row_err(descriptor: &TableDescriptor, id: i64, source: DateError) -> NormalizeError {
    NormalizeError::Row {
        table: descriptor.table,
        id,
        source,
    }
}
