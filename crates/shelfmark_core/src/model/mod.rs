//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical book and user records stored by the catalog.
//! - Keep external content references opaque at the model boundary.
//!
//! # Invariants
//! - Records are immutable after construction; the catalog only appends.
//! - No identity is enforced: duplicate isbns and user ids are permitted.

pub mod book;
pub mod content;
pub mod user;
