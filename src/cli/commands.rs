//! CLI command implementations
//!
//! `serve` follows a fixed boot sequence:
//! 1. Resolve configuration
//! 2. Initialise logging
//! 3. Load the API document from the registry (fatal on failure)
//! 4. Bind and serve
//!
//! Nothing is served unless step 3 succeeds.

use std::fs;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::registry::{ApiDocument, PublishReceipt, RegistryClient, RegistryCoordinates};

use super::args::{Cli, Command, PublishOptions, ServeOptions};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// OpenAPI description of this service, published by `publish` by default
pub const BUNDLED_OPENAPI: &str = include_str!("../../openapi.yaml");

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command.unwrap_or_default())
}

/// Run a single command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(options) => serve(&options),
        Command::Publish(options) => publish(&options),
    }
}

/// Boot and serve until the process is killed
pub fn serve(options: &ServeOptions) -> CliResult<()> {
    let config = Config::resolve_serve(options)?;
    init_logging(config.log_format);

    runtime()?.block_on(serve_with_config(config))
}

/// Async half of [`serve`]
pub async fn serve_with_config(config: Config) -> CliResult<()> {
    let document = load_document(&config.registry).await?;

    HttpServer::new(config.server, document)
        .start()
        .await
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
}

/// Fetch the API document once. Any failure is a boot failure.
pub async fn load_document(coordinates: &RegistryCoordinates) -> CliResult<ApiDocument> {
    let document = RegistryClient::new(coordinates.clone())
        .load()
        .await
        .map_err(|e| CliError::document_unavailable(&e))?;

    info!(
        version = %coordinates.version,
        title = document.title().unwrap_or("<untitled>"),
        "Successfully loaded OpenAPI spec from registry"
    );

    Ok(document)
}

/// Upload a document to the registry
pub fn publish(options: &PublishOptions) -> CliResult<()> {
    let config = Config::resolve(&options.common)?;
    init_logging(config.log_format);

    let content = match &options.file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => BUNDLED_OPENAPI.to_string(),
    };

    runtime()?.block_on(publish_document(&config.registry, &content))?;
    Ok(())
}

/// Async half of [`publish`]
pub async fn publish_document(
    coordinates: &RegistryCoordinates,
    content: &str,
) -> CliResult<PublishReceipt> {
    let receipt = RegistryClient::new(coordinates.clone())
        .publish(content)
        .await
        .map_err(|e| CliError::publish_failed(&e))?;

    info!(
        group_id = %receipt.group_id,
        artifact_id = %receipt.artifact_id,
        version = %receipt.version,
        "Published OpenAPI spec to registry"
    );

    Ok(receipt)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}
