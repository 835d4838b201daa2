//! API document loader
//!
//! Runs once at startup. One GET, no retry, no refresh; the transport's
//! default timeouts apply.

use tracing::debug;

use super::client::RegistryClient;
use super::document::ApiDocument;
use super::errors::{RegistryError, RegistryResult};

impl RegistryClient {
    /// Fetch and parse the content of the configured artifact version.
    pub async fn load(&self) -> RegistryResult<ApiDocument> {
        let url = self.coordinates.content_url();
        debug!(%url, "fetching API document from registry");

        let response = self
            .http
            .get(&url)
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

        ApiDocument::from_yaml_str(&body)
    }
}
