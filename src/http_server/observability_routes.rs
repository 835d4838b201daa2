//! Health Route
//!
//! Liveness check reporting the crate version and how many books are held.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::books::BookStore;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub books: usize,
}

/// Health check route at `/health`
pub fn health_routes(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn health_handler(State(store): State<Arc<BookStore>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: store.len(),
    };

    (StatusCode::OK, Json(response))
}
