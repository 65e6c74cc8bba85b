//! User domain model.
//!
//! # Responsibility
//! - Define the registered-user record stored by the catalog.
//!
//! # Invariants
//! - `held_book` is a construction-time snapshot, not a live checkout
//!   relation; no operation updates it after the user is built.

use crate::model::book::Book;
use serde::{Deserialize, Serialize};

/// Registered catalog user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Full name of the user.
    pub name: String,
    /// User identifier, stored as given; duplicates are permitted.
    pub id: String,
    /// Optional snapshot of a book associated at construction time.
    pub held_book: Option<Book>,
}

impl User {
    /// Creates a user with no held book.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            held_book: None,
        }
    }

    /// Creates a user holding a snapshot copy of `book`.
    pub fn with_held_book(
        name: impl Into<String>,
        id: impl Into<String>,
        book: Book,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            held_book: Some(book),
        }
    }

    /// Returns whether a held-book snapshot is present.
    pub fn holds_book(&self) -> bool {
        self.held_book.is_some()
    }
}
