//! # Book Errors
//!
//! Request-scoped errors. None of these terminate the process; each maps to
//! a status code and a JSON error body.

use thiserror::Error;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Errors raised while creating or looking up books
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// Request body is not JSON or has the wrong shape
    #[error("Invalid request body")]
    InvalidBody,

    /// Request body exceeds the accepted size
    #[error("Request body too large")]
    BodyTooLarge,

    /// Title or author missing or empty
    #[error("Title and author are required")]
    MissingFields,

    /// No book stored under the requested id
    #[error("Book not found")]
    NotFound,
}

impl BookError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BookError::InvalidBody => 400,
            BookError::BodyTooLarge => 413,
            BookError::MissingFields => 400,
            BookError::NotFound => 404,
        }
    }
}
