//! API Documentation Route
//!
//! Serves the document loaded from the registry at startup.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::registry::ApiDocument;

/// Create documentation routes
pub fn docs_routes(document: Arc<ApiDocument>) -> Router {
    Router::new()
        .route("/api-docs", get(api_docs_handler))
        .with_state(document)
}

async fn api_docs_handler(State(document): State<Arc<ApiDocument>>) -> Json<Value> {
    Json(document.as_value().clone())
}
