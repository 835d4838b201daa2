//! CLI argument definitions using clap
//!
//! Commands:
//! - library-api [serve] [--config <path>] [--port <port>] ...
//! - library-api publish [--file <path>] [--config <path>] ...
//!
//! Flags override values from the config file, which override defaults.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// library-api - in-memory book API documented from a schema registry
#[derive(Parser, Debug)]
#[command(name = "library-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the API document from the registry and serve the API
    Serve(ServeOptions),

    /// Upload an OpenAPI document to the registry
    Publish(PublishOptions),
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve(ServeOptions::default())
    }
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonOptions {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Registry REST base URL
    #[arg(long)]
    pub registry_url: Option<String>,

    /// Registry group ID
    #[arg(long)]
    pub group_id: Option<String>,

    /// Registry artifact ID
    #[arg(long)]
    pub artifact_id: Option<String>,

    /// Registry artifact version
    #[arg(long)]
    pub artifact_version: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeOptions {
    #[command(flatten)]
    pub common: CommonOptions,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PublishOptions {
    #[command(flatten)]
    pub common: CommonOptions,

    /// Document to publish (default: the bundled openapi.yaml)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["library-api"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "library-api",
            "serve",
            "--port",
            "8080",
            "--registry-url",
            "http://registry:8080/apis/registry/v3",
            "--log-format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Serve(options)) => {
                assert_eq!(options.port, Some(8080));
                assert_eq!(
                    options.common.registry_url.as_deref(),
                    Some("http://registry:8080/apis/registry/v3")
                );
                assert_eq!(options.common.log_format, Some(LogFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_publish_file() {
        let cli = Cli::try_parse_from(["library-api", "publish", "--file", "api.yaml"]).unwrap();
        match cli.command {
            Some(Command::Publish(options)) => {
                assert_eq!(options.file, Some(PathBuf::from("api.yaml")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
