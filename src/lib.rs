//! library-api - an in-memory book API documented from a schema registry
//!
//! At startup the service fetches its OpenAPI description from the
//! registry and refuses to serve without it. Books live in memory only and
//! are lost on restart.

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod registry;
