//! API document publisher
//!
//! Uploads a document as a version of the configured artifact, creating the
//! artifact on first use. Publishing an existing version is a no-op on the
//! registry side.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::client::RegistryClient;
use super::document::ApiDocument;
use super::errors::{RegistryError, RegistryResult};

/// Artifact type the registry files the document under
pub const ARTIFACT_TYPE: &str = "OPENAPI";

/// Content type of uploaded documents
pub const CONTENT_TYPE: &str = "application/x-yaml";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateArtifact<'a> {
    artifact_id: &'a str,
    artifact_type: &'a str,
    first_version: CreateVersion<'a>,
}

#[derive(Debug, Serialize)]
struct CreateVersion<'a> {
    version: &'a str,
    content: VersionContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionContent<'a> {
    content: &'a str,
    content_type: &'a str,
}

/// Where a published document ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl RegistryClient {
    /// Publish `content` as the configured artifact version.
    ///
    /// The content must parse the same way `load` would parse it; anything
    /// else is rejected before contacting the registry.
    pub async fn publish(&self, content: &str) -> RegistryResult<PublishReceipt> {
        ApiDocument::from_yaml_str(content)?;

        let coords = &self.coordinates;
        let url = format!(
            "{}?ifExists=FIND_OR_CREATE_VERSION",
            coords.artifacts_url()
        );
        debug!(%url, version = %coords.version, "publishing API document");

        let request = CreateArtifact {
            artifact_id: &coords.artifact_id,
            artifact_type: ARTIFACT_TYPE,
            first_version: CreateVersion {
                version: &coords.version,
                content: VersionContent {
                    content,
                    content_type: CONTENT_TYPE,
                },
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| RegistryError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| RegistryError::Fetch { url, source })?;

        // The registry may normalise the version; report what it stored.
        let version = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                v.pointer("/version/version")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| coords.version.clone());

        Ok(PublishReceipt {
            group_id: coords.group_id.clone(),
            artifact_id: coords.artifact_id.clone(),
            version,
        })
    }
}
