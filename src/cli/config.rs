//! Configuration file structure
//!
//! Every field is optional; a missing file section falls back to the
//! built-in defaults (port 3000, the local registry coordinates).
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 3000 },
//!   "registry": {
//!     "base_url": "http://localhost:8080/apis/registry/v3",
//!     "group_id": "group001",
//!     "artifact_id": "library-api",
//!     "version": "1.0.0"
//!   },
//!   "log_format": "pretty"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::registry::RegistryCoordinates;

use super::args::{CommonOptions, ServeOptions};
use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub registry: RegistryCoordinates,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Build the effective configuration: defaults, then the config file
    /// if one is given, then flags.
    pub fn resolve(options: &CommonOptions) -> CliResult<Self> {
        let mut config = match &options.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(url) = &options.registry_url {
            config.registry.base_url = url.clone();
        }
        if let Some(group_id) = &options.group_id {
            config.registry.group_id = group_id.clone();
        }
        if let Some(artifact_id) = &options.artifact_id {
            config.registry.artifact_id = artifact_id.clone();
        }
        if let Some(version) = &options.artifact_version {
            config.registry.version = version.clone();
        }
        if let Some(format) = options.log_format {
            config.log_format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// [`Config::resolve`] plus the listening socket flags
    pub fn resolve_serve(options: &ServeOptions) -> CliResult<Self> {
        let mut config = Self::resolve(&options.common)?;

        if let Some(host) = &options.host {
            config.server.host = host.clone();
        }
        if let Some(port) = options.port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server port must be > 0"));
        }

        if self.server.host.is_empty() {
            return Err(CliError::config_error("server host must not be empty"));
        }

        self.registry.validate().map_err(CliError::config_error)
    }
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, config: serde_json::Value) -> std::path::PathBuf {
        let path = temp_dir.path().join("library-api.json");
        fs::write(&path, config.to_string()).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Config::resolve(&CommonOptions::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.registry.group_id, "group001");
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({
                "server": { "port": 8081 },
                "registry": { "artifact_id": "books" },
                "log_format": "json"
            }),
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.registry.artifact_id, "books");
        assert_eq!(config.registry.version, "1.0.0");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({
                "server": { "port": 8081 },
                "registry": { "group_id": "from-file", "version": "2.0.0" }
            }),
        );

        let options = ServeOptions {
            common: CommonOptions {
                config: Some(path),
                group_id: Some("from-flag".to_string()),
                ..Default::default()
            },
            port: Some(9000),
            ..Default::default()
        };

        let config = Config::resolve_serve(&options).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.registry.group_id, "from-flag");
        assert_eq!(config.registry.version, "2.0.0");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(&temp_dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library-api.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_rejects_zero_port() {
        let options = ServeOptions {
            port: Some(0),
            ..Default::default()
        };
        let err = Config::resolve_serve(&options).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_rejects_bad_registry_url() {
        let options = CommonOptions {
            registry_url: Some("localhost:8080".to_string()),
            ..Default::default()
        };
        assert!(Config::resolve(&options).is_err());
    }
}
