//! Book HTTP Routes
//!
//! `POST /books` stores a book and returns its new id. `GET /books/:id`
//! confirms the id exists by echoing it back; the stored title and author
//! are not returned.
//!
//! Extractor rejections are mapped onto book errors so that clients only
//! ever see JSON bodies.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        DefaultBodyLimit, Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{book_error, ApiError};
use crate::books::{BookError, BookStore, CreateBookRequest};

/// Largest `POST /books` body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIdResponse {
    pub id: String,
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/books", post(create_book_handler))
        .route("/books/:id", get(get_book_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(store)
}

// ==================
// Handlers
// ==================

/// The body is read raw so that the request's Content-Type does not
/// matter and every decoding failure maps to the same 400.
async fn create_book_handler(
    State(store): State<Arc<BookStore>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<BookIdResponse>), ApiError> {
    let body = body.map_err(|rejection| book_error(body_rejection(rejection)))?;
    let book = CreateBookRequest::from_slice(&body)
        .and_then(CreateBookRequest::into_book)
        .map_err(book_error)?;

    let id = store.create(book);
    debug!(%id, "book created");

    Ok((
        StatusCode::CREATED,
        Json(BookIdResponse { id: id.to_string() }),
    ))
}

/// An id that does not even decode cannot have been issued by `create`.
async fn get_book_handler(
    State(store): State<Arc<BookStore>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<BookIdResponse>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(book_error(BookError::NotFound));
    };
    if !store.exists(&id) {
        return Err(book_error(BookError::NotFound));
    }

    Ok(Json(BookIdResponse { id }))
}

fn body_rejection(rejection: BytesRejection) -> BookError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        BookError::BodyTooLarge
    } else {
        BookError::InvalidBody
    }
}
