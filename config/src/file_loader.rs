//! # Settings File Loading
//!
//! Loads settings overrides from TOML or YAML files, detecting the format
//! from the file extension.

use std::path::Path;

use crate::settings::SettingsOverlay;

/// Settings file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(String),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(String),

    #[error("Config file has no extension")]
    NoExtension,

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String)
}

/// Load settings from a TOML file.
pub fn load_from_toml(path: &Path) -> Result<SettingsOverlay, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    toml::from_str(&contents).map_err(|e| ConfigFileError::TomlParse(e.to_string()))
}

/// Load settings from a YAML file.
pub fn load_from_yaml(path: &Path) -> Result<SettingsOverlay, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    serde_yaml::from_str(&contents).map_err(|e| ConfigFileError::YamlParse(e.to_string()))
}

/// Load settings from file with format auto-detection.
///
/// ## Supported Formats
/// - `.toml`: TOML format
/// - `.yaml` / `.yml`: YAML format
pub fn load_from_file(path: &Path) -> Result<SettingsOverlay, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ConfigFileError::NoExtension)?;

    match extension.to_ascii_lowercase().as_str() {
        "toml" => load_from_toml(path),
        "yaml" | "yml" => load_from_yaml(path),
        other => Err(ConfigFileError::UnsupportedFormat(other.to_string()))
    }
}
