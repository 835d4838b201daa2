//! Registry coordinates
//!
//! An artifact version in the registry is addressed by group, artifact and
//! version under the registry's v3 REST base URL.

use serde::{Deserialize, Serialize};

/// Location of the API document in the schema registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCoordinates {
    /// Registry REST base (default: "http://localhost:8080/apis/registry/v3")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Group ID (default: "group001")
    #[serde(default = "default_group_id")]
    pub group_id: String,

    /// Artifact ID (default: "library-api")
    #[serde(default = "default_artifact_id")]
    pub artifact_id: String,

    /// Artifact version (default: "1.0.0")
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/apis/registry/v3".to_string()
}

fn default_group_id() -> String {
    "group001".to_string()
}

fn default_artifact_id() -> String {
    "library-api".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for RegistryCoordinates {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            group_id: default_group_id(),
            artifact_id: default_artifact_id(),
            version: default_version(),
        }
    }
}

impl RegistryCoordinates {
    /// Default coordinates against a different registry base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// URL of the raw content of the configured artifact version
    pub fn content_url(&self) -> String {
        format!(
            "{}/groups/{}/artifacts/{}/versions/{}/content",
            self.base(),
            self.group_id,
            self.artifact_id,
            self.version
        )
    }

    /// URL of the artifact collection of the configured group
    pub fn artifacts_url(&self) -> String {
        format!("{}/groups/{}/artifacts", self.base(), self.group_id)
    }

    /// Check that the coordinates can address an artifact
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "registry base_url must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }

        for (name, value) in [
            ("group_id", &self.group_id),
            ("artifact_id", &self.artifact_id),
            ("version", &self.version),
        ] {
            if value.is_empty() {
                return Err(format!("registry {} must not be empty", name));
            }
        }

        Ok(())
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
