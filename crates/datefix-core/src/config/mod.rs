//! Configuration system for datefix.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod database_config;
pub mod datefix_config;
pub mod normalize_config;

pub use database_config::DatabaseConfig;
pub use datefix_config::DatefixConfig;
pub use normalize_config::NormalizeConfig;
