//! CLI module for library-api
//!
//! Provides command-line interface for:
//! - serve: Load the API document and serve the book API (default)
//! - publish: Upload an OpenAPI document to the schema registry

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, CommonOptions, PublishOptions, ServeOptions};
pub use commands::{
    load_document, publish, publish_document, run, run_command, serve, serve_with_config,
    BUNDLED_OPENAPI,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
