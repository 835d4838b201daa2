//! Schema registry access
//!
//! The service documents itself with an OpenAPI description stored in an
//! Apicurio-style registry (v3 REST API). The document is fetched once at
//! startup and served verbatim (as JSON) for the rest of the process.
//!
//! # Usage
//!
//! ```ignore
//! use library_api::registry::{RegistryClient, RegistryCoordinates};
//!
//! let client = RegistryClient::new(RegistryCoordinates::default());
//! let document = client.load().await?;
//! ```

mod client;
mod coordinates;
mod document;
mod errors;
mod loader;
mod publisher;

pub use client::RegistryClient;
pub use coordinates::RegistryCoordinates;
pub use document::ApiDocument;
pub use errors::{RegistryError, RegistryErrorKind, RegistryResult};
pub use publisher::{PublishReceipt, ARTIFACT_TYPE, CONTENT_TYPE};
