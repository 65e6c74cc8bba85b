//! Flat-record book export.
//!
//! # Responsibility
//! - Write a plain-text record of a single book to a destination path.
//! - Report failures as values; peripheral I/O never panics the host.
//!
//! # Invariants
//! - Record layout is `Title:`/`Author:`/`ISBN:` lines, a blank line, then
//!   the raw content text.
//! - Catalog state is never touched; the exporter only consumes field text.

use crate::model::book::Book;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub type ExportResult<T> = Result<T, ExportError>;

/// Error raised when a flat record cannot be written.
#[derive(Debug)]
pub enum ExportError {
    Create { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { path, source } => {
                write!(f, "failed to create record file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write record file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Create { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

/// Writes one flat book record to `destination`.
///
/// # Errors
/// - `ExportError::Create` when the destination cannot be opened for writing.
/// - `ExportError::Write` when writing the record fails midway.
pub fn write_flat_record(
    destination: &Path,
    title: &str,
    author: &str,
    isbn: &str,
    content: &str,
) -> ExportResult<()> {
    let mut file = File::create(destination).map_err(|source| {
        report_failure(ExportError::Create {
            path: destination.to_path_buf(),
            source,
        })
    })?;

    write_record(&mut file, title, author, isbn, content).map_err(|source| {
        report_failure(ExportError::Write {
            path: destination.to_path_buf(),
            source,
        })
    })
}

/// Writes `book`'s fields plus `content_text` as a flat record.
pub fn export_book(destination: &Path, book: &Book, content_text: &str) -> ExportResult<()> {
    write_flat_record(destination, &book.title, &book.author, &book.isbn, content_text)
}

fn write_record(
    out: &mut impl Write,
    title: &str,
    author: &str,
    isbn: &str,
    content: &str,
) -> io::Result<()> {
    writeln!(out, "Title: {title}")?;
    writeln!(out, "Author: {author}")?;
    writeln!(out, "ISBN: {isbn}")?;
    writeln!(out)?;
    write!(out, "{content}")
}

fn report_failure(err: ExportError) -> ExportError {
    error!("event=record_export module=export status=error error={err}");
    err
}
