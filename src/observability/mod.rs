//! Observability for library-api
//!
//! - Structured logging through `tracing` (JSON or pretty)
//! - Per-request spans from `tower_http::trace::TraceLayer`, attached in
//!   [`crate::http_server`]
//!
//! # Usage
//!
//! ```ignore
//! use library_api::observability::{init_logging, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! tracing::info!(port = 3000, "server starting");
//! ```

mod logging;

pub use logging::{init_logging, LogFormat};
