//! The fixed datefix invocation: load config, open the database, normalize
//! the configured tables in order.

use std::path::Path;

use datefix_core::config::DatefixConfig;
use datefix_core::errors::NormalizeError;
use datefix_storage::{run_all, Database, PassMode, PassReport};

/// Run every configured pass against the database resolved from `root`.
///
/// Backing up the database beforehand and checking the results afterwards
/// are left to the operator.
pub fn run(root: &Path) -> Result<Vec<PassReport>, NormalizeError> {
    let config = DatefixConfig::load(root)?;

    let db_path = root.join(config.database.effective_path());
    let mut db = Database::open(&db_path)?;
    db.ensure_integrity()?;

    let mode = if config.normalize.effective_dry_run() {
        PassMode::DryRun
    } else {
        PassMode::Commit
    };
    let tables = config.normalize.effective_tables();
    tracing::info!(database = %db_path.display(), ?tables, ?mode, "starting normalization");

    run_all(db.conn_mut(), &tables, mode)
}
