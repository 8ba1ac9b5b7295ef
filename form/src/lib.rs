//! Configuration form controller.
//!
//! [`FormController`] owns the [`Configuration`](wizard_core::Configuration)
//! being edited, the endpoint base address and the last displayed response.
//! Edits go through a single entry point; each of the three backend
//! operations is reached through [`FormController::submit`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use client::HttpMetadataBackend;
//! use form::FormController;
//! use wizard_core::{Field, FieldValue, Operation};
//!
//! let backend = HttpMetadataBackend::new(std::time::Duration::from_secs(60))?;
//! let form = FormController::new(Arc::new(backend));
//! form.apply_edit(Field::TableProjectId, FieldValue::text("proj-x"))?;
//! form.set_endpoint_base("http://api.local");
//! let outcome = form.submit(Operation::GenerateTableDescription).await;
//! println!("{}", outcome.to_pretty_json());
//! ```

mod controller;
mod outcome;

pub use controller::FormController;
pub use outcome::SubmitOutcome;
