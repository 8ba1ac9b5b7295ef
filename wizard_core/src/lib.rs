//! Shared types for the metadata wizard.
//!
//! The [`Configuration`] aggregate is the request body sent to the metadata
//! generation backend. It is edited one [`Field`] at a time through
//! [`Configuration::with_edit`], which also keeps the two derived
//! `dataset_settings` identifiers in step with `table_settings`.

pub mod fields;
pub mod fqn;
pub mod operation;
pub mod types;

pub use fields::{Field, FieldKind, FieldValue, SettingsGroup};
pub use fqn::{DatasetFqn, TableFqn};
pub use operation::Operation;
pub use types::{
    ClientOptionsSettings, ClientSettings, Configuration, DatasetSettings, GenerationStrategy,
    TableSettings
};
