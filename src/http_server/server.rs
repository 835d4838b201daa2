//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! The book store and the API document are built by the caller and handed
//! to the routers as shared state; nothing here is global.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::book_routes::book_routes;
use super::config::HttpServerConfig;
use super::docs_routes::docs_routes;
use super::errors::{not_found, panic_response};
use super::observability_routes::health_routes;
use crate::books::BookStore;
use crate::registry::ApiDocument;

/// HTTP Server for the library API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with an empty book store
    pub fn new(config: HttpServerConfig, document: ApiDocument) -> Self {
        Self::with_store(config, document, Arc::new(BookStore::new()))
    }

    /// Create a server around an existing book store
    pub fn with_store(
        config: HttpServerConfig,
        document: ApiDocument,
        store: Arc<BookStore>,
    ) -> Self {
        let router = build_router(store, Arc::new(document));
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        info!("Server running on http://{}", addr);
        info!("API documentation available at http://{}/api-docs", addr);

        axum::serve(listener, self.router).await
    }
}

/// Build the combined router with all endpoints
pub fn build_router(store: Arc<BookStore>, document: Arc<ApiDocument>) -> Router {
    let router = Router::new()
        .merge(health_routes(store.clone()))
        .merge(docs_routes(document))
        .merge(book_routes(store))
        .fallback(not_found);

    with_middleware(router)
}

/// Attach request tracing and panic recovery.
///
/// Panics are turned into a 500 JSON response inside the trace layer, so
/// they are logged like any other failed request.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ApiDocument {
        ApiDocument::from_yaml_str("openapi: 3.0.0\n").unwrap()
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), document());
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::new(config, document());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(HttpServerConfig::default(), document());
        let _router = server.router();
    }
}
