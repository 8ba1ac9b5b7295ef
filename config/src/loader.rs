//! # Environment Variable Loader
//!
//! Loads settings overrides from environment variables.
//!
//! # Variables
//! - `METADATA_WIZARD_ENDPOINT`: endpoint base address
//! - `METADATA_WIZARD_TIMEOUT_SECS`: request timeout in seconds
//! - `METADATA_WIZARD_RESPONSE_ORDERING`: `last_write_wins` or
//!   `latest_request_wins`
//! - `METADATA_WIZARD_LOG_LEVEL`: trace/debug/info/warn/error

use std::env;
use std::str::FromStr;

use crate::settings::SettingsOverlay;

pub const ENV_ENDPOINT: &str = "METADATA_WIZARD_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "METADATA_WIZARD_TIMEOUT_SECS";
pub const ENV_RESPONSE_ORDERING: &str = "METADATA_WIZARD_RESPONSE_ORDERING";
pub const ENV_LOG_LEVEL: &str = "METADATA_WIZARD_LOG_LEVEL";

/// Load settings overrides from the environment.
///
/// Unset or empty variables leave the corresponding setting alone. Values
/// that fail to parse are logged and ignored.
pub fn load_from_env() -> SettingsOverlay {
    SettingsOverlay {
        endpoint_base: non_empty_env(ENV_ENDPOINT),
        request_timeout_secs: parse_env(ENV_TIMEOUT_SECS),
        response_ordering: parse_env(ENV_RESPONSE_ORDERING),
        log_level: non_empty_env(ENV_LOG_LEVEL)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display
{
    let raw = non_empty_env(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {}={}: {}", key, raw, e);
            None
        }
    }
}
