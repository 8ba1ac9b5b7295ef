//! # Wizard Settings
//!
//! Runtime settings for the metadata wizard. These describe where and how
//! requests are sent; they are not part of the request body.
//!
//! This crate provides:
//! - The [`WizardSettings`] structure and its defaults
//! - Environment variable loading (`METADATA_WIZARD_*`)
//! - Settings file loading (TOML/YAML)
//! - Precedence merge (CLI > env > file > defaults)
//! - Validation through the `validator` crate

pub mod file_loader;
pub mod loader;
pub mod precedence;
pub mod settings;

use std::path::Path;

pub use file_loader::{ConfigFileError, load_from_file, load_from_toml, load_from_yaml};
pub use loader::load_from_env;
pub use precedence::merge_settings;
pub use settings::{ResponseOrdering, SettingsOverlay, WizardSettings};
pub use validator::Validate;

/// Errors raised while resolving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    File(#[from] ConfigFileError),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] validator::ValidationErrors)
}

/// Resolve settings from every source and validate the result.
///
/// `file` is optional; when absent only env and CLI overrides apply on top of
/// the defaults.
pub fn resolve(
    file: Option<&Path>,
    cli: Option<SettingsOverlay>
) -> Result<WizardSettings, SettingsError> {
    let from_file = match file {
        Some(path) => load_from_file(path)?,
        None => SettingsOverlay::default()
    };
    let from_env = load_from_env();

    let settings = merge_settings(
        WizardSettings::default(),
        from_file,
        "file",
        from_env,
        "env",
        cli,
        "cli"
    );
    settings.validate()?;
    Ok(settings)
}
