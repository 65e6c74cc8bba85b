//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record stored by the catalog.
//!
//! # Invariants
//! - All fields are supplied at construction and never mutated afterwards.
//! - `isbn` is conceptually the identity but never enforced: duplicates are
//!   permitted and the format is not validated.

use crate::model::content::BookContent;
use serde::{Deserialize, Serialize};

/// Canonical book record.
///
/// The record is a plain value: copying it (for held-book snapshots or
/// sorted views) copies the text fields and shares the content reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book.
    pub title: String,
    /// Author of the book.
    pub author: String,
    /// International Standard Book Number, stored as given.
    pub isbn: String,
    /// Opaque external content reference; skipped on the wire.
    #[serde(skip)]
    pub content: BookContent,
}

impl Book {
    /// Creates a book with the given fields and content source.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        content: BookContent,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            content,
        }
    }

    /// Creates a catalog-only book with no content source attached.
    pub fn without_content(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::new(title, author, isbn, BookContent::Absent)
    }

    /// Returns whether an open content source is attached.
    pub fn has_content(&self) -> bool {
        self.content.is_open()
    }
}
