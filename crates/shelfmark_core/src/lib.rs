//! Core catalog domain for Shelfmark.
//! This crate is the single source of truth for catalog invariants.

pub mod catalog;
pub mod export;
pub mod logging;
pub mod model;

pub use catalog::{Catalog, OrganizationKey, SharedCatalog};
pub use export::{export_book, write_flat_record, ExportError, ExportResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::Book;
pub use model::content::{BookContent, ContentError, ContentHandle, ContentResult};
pub use model::user::User;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
