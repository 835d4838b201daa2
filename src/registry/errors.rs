//! Registry error types
//!
//! Any of these during startup is fatal: the service must not begin
//! serving without its API document.

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Broad classification of a [`RegistryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryErrorKind {
    /// Registry unreachable or answered with a non-success status
    Fetch,
    /// Response body is not a structured document
    Parse,
}

/// Errors talking to the schema registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport failure, including failure to read the response body
    #[error("failed to fetch from registry at {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Registry answered, but not with a success status
    #[error("registry returned status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Body is not valid YAML or not a mapping at the top level
    #[error("failed to parse API document: {0}")]
    Parse(String),
}

impl RegistryError {
    pub fn kind(&self) -> RegistryErrorKind {
        match self {
            RegistryError::Fetch { .. } | RegistryError::Status { .. } => RegistryErrorKind::Fetch,
            RegistryError::Parse(_) => RegistryErrorKind::Parse,
        }
    }
}

impl From<serde_yaml::Error> for RegistryError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_fetch_kind() {
        let err = RegistryError::Status {
            url: "http://registry/content".into(),
            status: 404,
        };
        assert_eq!(err.kind(), RegistryErrorKind::Fetch);
        assert_eq!(
            err.to_string(),
            "registry returned status 404 for http://registry/content"
        );
    }

    #[test]
    fn test_yaml_error_is_parse_kind() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2").unwrap_err();
        let err = RegistryError::from(yaml_err);
        assert_eq!(err.kind(), RegistryErrorKind::Parse);
    }
}
