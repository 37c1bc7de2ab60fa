//! Tests for the configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use datefix_core::config::datefix_config::{ENV_DATABASE, ENV_DRY_RUN};
use datefix_core::config::DatefixConfig;
use datefix_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_datefix_env_vars() {
    for key in [ENV_DATABASE, ENV_DRY_RUN] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults_match_fixed_invocation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_datefix_env_vars();

    let dir = tempdir();
    let config = DatefixConfig::load(dir.path()).unwrap();

    assert_eq!(config.database.effective_path(), PathBuf::from("budget.db"));
    assert_eq!(config.normalize.effective_tables(), vec!["budget", "salary"]);
    assert!(!config.normalize.effective_dry_run());
}

#[test]
fn test_project_file_then_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_datefix_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("datefix.toml"),
        r#"
[database]
path = "from-file.db"

[normalize]
tables = ["salary"]
dry_run = false
"#,
    )
    .unwrap();
    std::env::set_var(ENV_DATABASE, "from-env.db");
    std::env::set_var(ENV_DRY_RUN, "true");

    let config = DatefixConfig::load(dir.path()).unwrap();
    assert_eq!(config.database.effective_path(), PathBuf::from("from-env.db"));
    assert_eq!(config.normalize.effective_tables(), vec!["salary"]);
    assert!(config.normalize.effective_dry_run());

    clear_datefix_env_vars();
}

#[test]
fn test_invalid_dry_run_env_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_datefix_env_vars();

    let dir = tempdir();
    std::env::set_var(ENV_DRY_RUN, "maybe");
    let result = DatefixConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));

    clear_datefix_env_vars();
}

#[test]
fn test_malformed_project_file_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_datefix_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("datefix.toml"), "[database\npath = 1").unwrap();
    let result = DatefixConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_unknown_table_fails_validation() {
    let config = DatefixConfig::from_toml(
        r#"
[normalize]
tables = ["budget", "expenses"]
"#,
    )
    .unwrap();
    match DatefixConfig::validate(&config) {
        Err(ConfigError::UnsupportedTable { name }) => assert_eq!(name, "expenses"),
        other => panic!("expected UnsupportedTable, got {other:?}"),
    }
}

#[test]
fn test_empty_database_path_fails_validation() {
    let config = DatefixConfig::from_toml("[database]\npath = \"  \"\n").unwrap();
    assert!(matches!(
        DatefixConfig::validate(&config),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "database.path"
    ));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = DatefixConfig::from_toml("[telemetry]\nenabled = true\n").unwrap();
    assert!(config.database.path.is_none());
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let config = DatefixConfig::from_toml(
        "[database]\npath = \"x.db\"\n[normalize]\ntables = [\"salary\"]\n",
    )
    .unwrap();
    let again = DatefixConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(again.database.path.as_deref(), Some("x.db"));
    assert_eq!(again.normalize.tables, vec!["salary"]);
}
