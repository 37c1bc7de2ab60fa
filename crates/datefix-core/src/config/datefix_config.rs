//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DatabaseConfig, NormalizeConfig};
use crate::errors::ConfigError;
use crate::tables::TableDescriptor;

/// Name of the project config file looked up in the working directory.
pub const CONFIG_FILE: &str = "datefix.toml";

pub const ENV_DATABASE: &str = "DATEFIX_DATABASE";
pub const ENV_DRY_RUN: &str = "DATEFIX_DRY_RUN";

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DATEFIX_*`)
/// 2. Project config (`datefix.toml` in the working directory)
/// 3. Compiled defaults: `budget.db`, every supported table, no dry run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatefixConfig {
    pub database: DatabaseConfig,
    pub normalize: NormalizeConfig,
}

impl DatefixConfig {
    /// Load configuration rooted at `root`. A missing project file is not an
    /// error; a malformed one is.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DatefixConfig) -> Result<(), ConfigError> {
        if let Some(ref path) = config.database.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "database.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        for name in &config.normalize.tables {
            TableDescriptor::lookup(name)?;
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut DatefixConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DatefixConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut DatefixConfig, other: &DatefixConfig) {
        if other.database.path.is_some() {
            base.database.path = other.database.path.clone();
        }
        if !other.normalize.tables.is_empty() {
            base.normalize.tables = other.normalize.tables.clone();
        }
        if other.normalize.dry_run.is_some() {
            base.normalize.dry_run = other.normalize.dry_run;
        }
    }

    fn apply_env_overrides(config: &mut DatefixConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_DATABASE) {
            config.database.path = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_DRY_RUN) {
            let v = val.parse::<bool>().map_err(|_| ConfigError::ValidationFailed {
                field: ENV_DRY_RUN.to_string(),
                message: format!("expected true or false, got {val:?}"),
            })?;
            config.normalize.dry_run = Some(v);
        }
        Ok(())
    }
}
