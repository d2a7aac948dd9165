//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the two record collections live.
//! Both collections are persisted as whole blobs: every save rewrites the
//! full array, every load reads it back in one piece. There is no
//! incremental persistence, no schema versioning, and no migration path —
//! a representation change means a reset.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - Pages in `pages.json` (JSON array of records)
//!   - Links in `links.json`
//! - [`memory::InMemoryStore`]: in-memory blobs for testing, with an
//!   optional failure toggle to exercise the persist-warning path
//!
//! `load_*` distinguishes "nothing stored yet" (`Ok(None)`) from a broken
//! blob (`Err`); the database layer maps both a missing and an unreadable
//! blob to its seed dataset.

use crate::error::Result;
use crate::model::{Link, Page};

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the page and link collections.
pub trait DataStore {
    /// Load the stored page collection, or `None` if nothing is stored.
    fn load_pages(&self) -> Result<Option<Vec<Page>>>;

    /// Replace the stored page collection.
    fn save_pages(&mut self, pages: &[Page]) -> Result<()>;

    /// Load the stored link collection, or `None` if nothing is stored.
    fn load_links(&self) -> Result<Option<Vec<Link>>>;

    /// Replace the stored link collection.
    fn save_links(&mut self, links: &[Link]) -> Result<()>;
}
