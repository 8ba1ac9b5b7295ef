//! # Settings Precedence
//!
//! Merges settings from multiple sources.
//!
//! # Precedence Order
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Settings file
//! 4. Default values (lowest priority)

use crate::settings::{SettingsOverlay, WizardSettings};

/// Merge settings sources following CLI > env > file > defaults.
///
/// Each source only overrides the values it actually provides. Changed keys
/// are logged per source.
pub fn merge_settings(
    defaults: WizardSettings,
    file_overlay: SettingsOverlay,
    file_source_name: &str,
    env_overlay: SettingsOverlay,
    env_source_name: &str,
    cli_overlay: Option<SettingsOverlay>,
    cli_source_name: &str
) -> WizardSettings {
    let mut settings = defaults;

    settings = merge_with_logging(settings, file_overlay, file_source_name);
    settings = merge_with_logging(settings, env_overlay, env_source_name);

    if let Some(cli) = cli_overlay {
        settings = merge_with_logging(settings, cli, cli_source_name);
    }

    settings
}

fn merge_with_logging(
    mut base: WizardSettings,
    overlay: SettingsOverlay,
    source_name: &str
) -> WizardSettings {
    let mut changes = Vec::new();

    if let Some(endpoint) = overlay.endpoint_base {
        if base.endpoint_base.as_deref() != Some(endpoint.as_str()) {
            changes.push(format!("endpoint_base = {endpoint}"));
            base.endpoint_base = Some(endpoint);
        }
    }
    if let Some(timeout) = overlay.request_timeout_secs {
        if timeout != base.request_timeout_secs {
            changes.push(format!("request_timeout_secs = {timeout}"));
            base.request_timeout_secs = timeout;
        }
    }
    if let Some(ordering) = overlay.response_ordering {
        if ordering != base.response_ordering {
            changes.push(format!("response_ordering = {ordering}"));
            base.response_ordering = ordering;
        }
    }
    if let Some(level) = overlay.log_level {
        if level != base.log_level {
            changes.push(format!("log_level = {level}"));
            base.log_level = level;
        }
    }

    if !changes.is_empty() {
        tracing::info!("Settings from {}: {:?}", source_name, changes);
    }

    base
}
