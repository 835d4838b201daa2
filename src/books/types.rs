//! Book record types

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::{BookError, BookResult};

/// Identifier assigned to a book at creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored book. Both fields are non-empty once constructed through
/// [`CreateBookRequest::into_book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
}

/// Body of `POST /books`
///
/// Fields are optional at the wire level so that a missing field and an
/// empty one are both reported as a validation failure rather than a
/// malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl CreateBookRequest {
    /// Decode a raw request body.
    ///
    /// A literal `null` body decodes to a request with both fields missing.
    /// Anything other than an object or `null` (arrays included) is
    /// malformed.
    pub fn from_slice(body: &[u8]) -> BookResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|_| BookError::InvalidBody)?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value).map_err(|_| BookError::InvalidBody),
            _ => Err(BookError::InvalidBody),
        }
    }

    /// Check the required fields and produce the record to store
    pub fn into_book(self) -> BookResult<Book> {
        match (self.title, self.author) {
            (Some(title), Some(author)) if !title.is_empty() && !author.is_empty() => {
                Ok(Book { title, author })
            }
            _ => Err(BookError::MissingFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_is_uuid() {
        let id = BookId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn test_book_id_serializes_as_string() {
        let id = BookId::generate();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn test_valid_request() {
        let request =
            CreateBookRequest::from_slice(br#"{"title": "Dune", "author": "Herbert"}"#).unwrap();
        let book = request.into_book().unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let request = CreateBookRequest::from_slice(
            br#"{"title": "Dune", "author": "Herbert", "year": 1965}"#,
        )
        .unwrap();
        assert!(request.into_book().is_ok());
    }

    #[test]
    fn test_decoding_is_strict() {
        let err = CreateBookRequest::from_slice(br#"{"title": "Dune", "author": "Herbert"} {}"#)
            .unwrap_err();
        assert_eq!(err, BookError::InvalidBody);

        let request =
            CreateBookRequest::from_slice(br#"{"Title": "Dune", "Author": "Herbert"}"#).unwrap();
        assert_eq!(request.into_book().unwrap_err(), BookError::MissingFields);
    }

    #[test]
    fn test_malformed_body() {
        let bodies: [&[u8]; 6] = [
            b"not json",
            b"",
            b"{\"title\": ",
            b"42",
            b"[]",
            br#"["Dune", "Herbert"]"#,
        ];
        for body in bodies {
            assert_eq!(
                CreateBookRequest::from_slice(body).unwrap_err(),
                BookError::InvalidBody
            );
        }
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let err = CreateBookRequest::from_slice(br#"{"title": 1, "author": "X"}"#).unwrap_err();
        assert_eq!(err, BookError::InvalidBody);
    }

    #[test]
    fn test_empty_or_missing_fields() {
        let bodies: [&[u8]; 6] = [
            br#"{"title": "", "author": "X"}"#,
            br#"{"title": "X", "author": ""}"#,
            br#"{"title": "X"}"#,
            br#"{"author": null, "title": "X"}"#,
            br#"{}"#,
            b"null",
        ];
        for body in bodies {
            let request = CreateBookRequest::from_slice(body).unwrap();
            assert_eq!(request.into_book().unwrap_err(), BookError::MissingFields);
        }
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let request = CreateBookRequest::from_slice(br#"{"title": " ", "author": " "}"#).unwrap();
        assert!(request.into_book().is_ok());
    }
}
