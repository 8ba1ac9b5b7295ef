//! # Metadata Wizard Errors
//!
//! Error enums shared by the form controller, the HTTP transport and the
//! CLI.
//!
//! - Uses `thiserror` for structured error definitions
//! - Named fields in every message so log lines stay greppable
//! - Nothing here crosses the submit boundary: the controller folds every
//!   [`ClientError`] into the uniform failure payload

use serde::Serialize;
use thiserror::Error;

/// Message carried by the placeholder response shown after a failed submit.
pub const GENERIC_FAILURE_MESSAGE: &str = "Network Error or API issue";

/// Errors raised while routing an edit into the configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown settings group: {group}")]
    UnknownGroup { group: String },

    #[error("Unknown field {field} in group {group}")]
    UnknownField { group: String, field: String },

    #[error("Field {group}.{field} is derived from table_settings and cannot be edited")]
    DerivedField { group: String, field: String },

    #[error("Field {field} expects a {expected} value")]
    ValueKindMismatch { field: String, expected: String },

    #[error("Invalid strategy code: {value}")]
    InvalidStrategy { value: String }
}

/// Errors raised by the outbound request to the metadata backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse backend response: {reason}")]
    Parse { reason: String },

    #[error("Endpoint base is not set")]
    EndpointNotSet,

    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string()
        }
    }
}

/// Errors raised while parsing fully qualified BigQuery names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FqnError {
    #[error("Malformed {kind} name: {value} (expected {expected})")]
    Malformed {
        kind: String,
        value: String,
        expected: String
    }
}

/// Body displayed in place of a backend response when a submit fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailurePayload {
    pub error: String
}

impl Default for FailurePayload {
    fn default() -> Self {
        Self {
            error: GENERIC_FAILURE_MESSAGE.to_string()
        }
    }
}

impl FailurePayload {
    /// The failure payload as a JSON value, ready to be displayed.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_payload_shape() {
        let value = FailurePayload::default().to_value();
        assert_eq!(
            value,
            serde_json::json!({ "error": "Network Error or API issue" })
        );
    }

    #[test]
    fn test_failure_payload_serializes_like_value() {
        let payload = FailurePayload::default();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, payload.to_value());
    }

    #[test]
    fn test_form_error_messages() {
        let err = FormError::UnknownField {
            group: "table_settings".into(),
            field: "colour".into()
        };
        assert_eq!(
            err.to_string(),
            "Unknown field colour in group table_settings"
        );

        let err = FormError::InvalidStrategy { value: "9".into() };
        assert_eq!(err.to_string(), "Invalid strategy code: 9");
    }

    #[test]
    fn test_client_error_status_message() {
        let err = ClientError::Status {
            status: 503,
            message: "unavailable".into()
        };
        assert_eq!(err.to_string(), "Backend returned 503: unavailable");
    }

    #[test]
    fn test_client_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ClientError = parse_err.into();
        assert!(matches!(err, ClientError::Parse { .. }));
    }

    #[test]
    fn test_fqn_error_message() {
        let err = FqnError::Malformed {
            kind: "table".into(),
            value: "proj".into(),
            expected: "project.dataset.table".into()
        };
        assert!(err.to_string().contains("project.dataset.table"));
    }
}
