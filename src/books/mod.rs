//! In-memory book records
//!
//! Books are created once and live for the rest of the process. There is no
//! update or delete, so every identifier in the store was produced by
//! [`BookStore::create`].

mod errors;
mod store;
mod types;

pub use errors::BookError;
pub use store::BookStore;
pub use types::{Book, BookId, CreateBookRequest};
