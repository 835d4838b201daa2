//! Book store
//!
//! A single map behind one reader/writer lock. Reads take the shared lock,
//! `create` takes the exclusive lock. The lock is never held across I/O or
//! an await point.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::types::{Book, BookId};

/// In-memory mapping from [`BookId`] to [`Book`]
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<HashMap<BookId, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a book under a freshly generated identifier.
    ///
    /// Callers validate the book first; the store accepts anything.
    pub fn create(&self, book: Book) -> BookId {
        let mut books = self.write();
        let mut id = BookId::generate();
        while books.contains_key(&id) {
            id = BookId::generate();
        }
        books.insert(id.clone(), book);
        id
    }

    /// Whether `id` was returned by an earlier `create`
    pub fn exists(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // No operation leaves the map half-updated, so a poisoned lock still
    // guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<BookId, Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<BookId, Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn dune() -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
        }
    }

    #[test]
    fn test_create_then_exists() {
        let store = BookStore::new();
        assert!(store.is_empty());

        let id = store.create(dune());
        assert!(store.exists(id.as_str()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id_does_not_exist() {
        let store = BookStore::new();
        store.create(dune());
        assert!(!store.exists("does-not-exist"));
        assert!(!store.exists(""));
    }

    #[test]
    fn test_same_book_twice_gets_distinct_ids() {
        let store = BookStore::new();
        let a = store.create(dune());
        let b = store.create(dune());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_concurrent_creates_are_unique_and_retrievable() {
        let store = Arc::new(BookStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || (0..100).map(|_| store.create(dune())).collect::<Vec<_>>())
            })
            .collect();

        let ids: Vec<BookId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 800);
        assert_eq!(store.len(), 800);
        assert!(ids.iter().all(|id| store.exists(id.as_str())));
    }
}
