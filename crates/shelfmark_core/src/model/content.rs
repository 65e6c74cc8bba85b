//! Opaque book content references.
//!
//! # Responsibility
//! - Wrap externally supplied content sources behind an opaque handle.
//! - Provide the collaborator-boundary helper that opens a source from disk.
//!
//! # Invariants
//! - Core code never reads or seeks through a handle; it only stores and
//!   copies the reference.
//! - Handle equality is identity of the shared source, never file state.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Content attached to a book record.
///
/// Explicit sum type instead of a nullable raw handle: `Absent` is a valid
/// state for catalog-only records whose full text lives elsewhere.
#[derive(Clone, Default)]
pub enum BookContent {
    /// No content source was supplied at construction.
    #[default]
    Absent,
    /// An opened external source; the catalog stores the reference only.
    Open(ContentHandle),
}

impl BookContent {
    /// Returns whether an open content source is attached.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

impl PartialEq for BookContent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Open(a), Self::Open(b)) => a.same_source(b),
            _ => false,
        }
    }
}

impl Debug for BookContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Open(handle) => write!(f, "Open({handle:?})"),
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Error raised at the content-source collaborator boundary.
#[derive(Debug)]
pub enum ContentError {
    Open { path: PathBuf, source: io::Error },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open content source `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
        }
    }
}

/// Opaque reference to an externally stored content source.
///
/// Clones share the same underlying source; the source is closed when the
/// last clone is dropped.
#[derive(Clone)]
pub struct ContentHandle {
    source: Arc<File>,
}

impl ContentHandle {
    /// Opens `path` for reading and wraps it as an opaque handle.
    ///
    /// This is the collaborator boundary: callers construct handles here and
    /// the catalog core only ever stores the result.
    ///
    /// # Errors
    /// - Returns `ContentError::Open` when the path cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ContentError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_file(file))
    }

    /// Wraps an already opened file supplied by an external collaborator.
    pub fn from_file(file: File) -> Self {
        Self {
            source: Arc::new(file),
        }
    }

    /// Returns whether two handles refer to the same underlying source.
    pub fn same_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl Debug for ContentHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The handle is opaque by contract; never leak file state here.
        f.write_str("ContentHandle(..)")
    }
}
