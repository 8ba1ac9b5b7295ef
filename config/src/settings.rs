//! # Settings Structures

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// How the controller treats responses that resolve out of order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResponseOrdering {
    /// Whichever request resolves last sets the displayed response.
    #[default]
    LastWriteWins,
    /// Responses older than the latest applied request are dropped.
    LatestRequestWins
}

/// Settings consumed by the form controller and the HTTP transport.
///
/// ## Fields
/// - `endpoint_base`: address prefix for outbound requests (default: unset)
/// - `request_timeout_secs`: per-request timeout (default: 60, 1..=600)
/// - `response_ordering`: see [`ResponseOrdering`] (default: last write wins)
/// - `log_level`: fallback filter when `RUST_LOG` is unset (default: "info")
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct WizardSettings {
    #[serde(default)]
    #[validate(length(min = 1, max = 2048))]
    pub endpoint_base: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub response_ordering: ResponseOrdering,

    #[serde(default = "default_log_level")]
    #[validate(custom(function = "validate_log_level"))]
    pub log_level: String
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn validate_log_level(value: &str) -> Result<(), validator::ValidationError> {
    match value {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(validator::ValidationError::new("Invalid log level"))
    }
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            endpoint_base: None,
            request_timeout_secs: default_request_timeout_secs(),
            response_ordering: ResponseOrdering::default(),
            log_level: default_log_level()
        }
    }
}

/// A partial set of settings from one source. `None` means "not given".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SettingsOverlay {
    #[serde(default)]
    pub endpoint_base: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub response_ordering: Option<ResponseOrdering>,
    #[serde(default)]
    pub log_level: Option<String>
}

impl SettingsOverlay {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
