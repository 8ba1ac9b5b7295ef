//! HTTP transport to the metadata generation backend.
//!
//! ```text
//! FormController ──submit──▶ MetadataBackend::post_json
//!                               │  POST {endpoint_base}/{operation}
//!                               │  body: Configuration (JSON)
//!                               ▼
//!                        metadata backend
//! ```
//!
//! The controller owns URL construction and failure folding; this crate
//! only performs the request and reports what went wrong.

mod backend;

pub use backend::{HttpMetadataBackend, MetadataBackend};
pub use errors::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;
