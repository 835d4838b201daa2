//! # Library API HTTP Server Module
//!
//! Combines the endpoint routers into one Axum server.
//!
//! # Endpoints
//!
//! - `GET /api-docs` - API document loaded from the schema registry
//! - `POST /books` - Store a book, returns its id
//! - `GET /books/:id` - Check that a book id exists
//! - `GET /health` - Health check
//!
//! Every response body is JSON, errors included.

pub mod book_routes;
pub mod config;
pub mod docs_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ErrorResponse;
pub use server::{build_router, with_middleware, HttpServer};
