//! Catalog store and ordering queries.
//!
//! # Responsibility
//! - Own the authoritative book and user collections.
//! - Produce deterministically ordered book views without mutating state.
//!
//! # Invariants
//! - Collections are append-only; no operation removes a record.
//! - Insertion order is preserved; `organize_books` sorts a copy only.
//! - Every operation is total: no error conditions exist.

use crate::model::book::Book;
use crate::model::user::User;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static PROCESS_WIDE: Lazy<SharedCatalog> = Lazy::new(SharedCatalog::new);

/// Sort criterion for ordered book views.
///
/// `None` and `Name` share the title ordering: there is no distinct
/// "unordered" behavior, title order is the fallback for every key that does
/// not name another field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationKey {
    /// No specific criterion requested; falls back to title order.
    #[default]
    None,
    /// Order by book title.
    Name,
    /// Order by author name.
    Author,
    /// Order by isbn text.
    Isbn,
}

/// Authoritative in-memory store of books and users.
///
/// A plain value with no hidden global state: hosts construct one and pass
/// it to collaborators, or use [`SharedCatalog::process_wide`] when a single
/// process-wide instance is wanted.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    users: Vec<User>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a book. Always succeeds; duplicates are permitted.
    pub fn add_book(&mut self, book: Book) {
        debug!(
            "event=book_added module=catalog status=ok isbn={} total={}",
            book.isbn,
            self.books.len() + 1
        );
        self.books.push(book);
    }

    /// Appends a user. Always succeeds; duplicate ids are permitted.
    pub fn add_user(&mut self, user: User) {
        debug!(
            "event=user_added module=catalog status=ok id={} total={}",
            user.id,
            self.users.len() + 1
        );
        self.users.push(user);
    }

    /// Read-only view of the books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Read-only view of the users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns a freshly sorted copy of the books, ascending by `key`.
    ///
    /// # Contract
    /// - Comparison is raw byte ordering of the key string, not locale-aware.
    /// - Ties may appear in any relative order.
    /// - The underlying collection is never mutated; an empty catalog yields
    ///   an empty view for every key.
    pub fn organize_books(&self, key: OrganizationKey) -> Vec<Book> {
        let mut books = self.books.clone();
        match key {
            OrganizationKey::Author => books.sort_by(|a, b| a.author.cmp(&b.author)),
            OrganizationKey::Isbn => books.sort_by(|a, b| a.isbn.cmp(&b.isbn)),
            OrganizationKey::Name | OrganizationKey::None => {
                books.sort_by(|a, b| a.title.cmp(&b.title))
            }
        }
        books
    }
}

/// Clonable handle to one catalog behind a single exclusive lock.
///
/// Clones are handles to the same underlying state: mutation through one is
/// visible through all. Read accessors return snapshot copies so no lock
/// guard escapes the API.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    /// Creates a fresh shared handle over an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an explicitly constructed catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Returns the lazily created process-wide catalog handle.
    ///
    /// Idempotent: every call yields a handle to the same underlying state
    /// for the lifetime of the process.
    pub fn process_wide() -> Self {
        PROCESS_WIDE.clone()
    }

    /// Appends a book. Always succeeds; duplicates are permitted.
    pub fn add_book(&self, book: Book) {
        self.lock().add_book(book);
    }

    /// Appends a user. Always succeeds; duplicate ids are permitted.
    pub fn add_user(&self, user: User) {
        self.lock().add_user(user);
    }

    /// Snapshot copy of the books in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.lock().books().to_vec()
    }

    /// Snapshot copy of the users in insertion order.
    pub fn users(&self) -> Vec<User> {
        self.lock().users().to_vec()
    }

    /// Sorted snapshot of the books; see [`Catalog::organize_books`].
    pub fn organize_books(&self, key: OrganizationKey) -> Vec<Book> {
        self.lock().organize_books(key)
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        // Append-only state cannot be left torn by a panicking writer, so a
        // poisoned lock is safe to recover.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
