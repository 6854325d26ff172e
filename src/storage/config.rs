//! Application configuration and planner defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::plan::types::{RestUnit, Visibility};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Planner defaults applied to fresh drafts
    pub planner: PlannerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            planner: PlannerSettings::default(),
        }
    }
}

/// Planner default settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Default repeat count for a new series
    pub default_repeat_count: u32,
    /// Default pace percentage when targeting is enabled
    pub default_pace_percent: u8,
    /// Default unit for the between-series rest
    pub default_rest_unit: RestUnit,
    /// Default visibility for new templates
    pub default_visibility: Visibility,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            default_repeat_count: 1,
            default_pace_percent: 100,
            default_rest_unit: RestUnit::Seconds,
            default_visibility: Visibility::Private,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "trackplan", "TrackPlan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Get the template library database path.
pub fn get_database_path() -> PathBuf {
    get_data_dir().join("templates.db")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let config = AppConfig::default();
        assert_eq!(config.planner.default_repeat_count, 1);
        assert_eq!(config.planner.default_pace_percent, 100);
        assert_eq!(config.planner.default_visibility, Visibility::Private);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let toml = toml::to_string_pretty(&config).expect("Should serialize config");
        let parsed: AppConfig = toml::from_str(&toml).expect("Should parse config");
        assert_eq!(
            parsed.planner.default_rest_unit,
            config.planner.default_rest_unit
        );
    }
}
