//! # Storage Layer
//!
//! Bookmarks are the only mutable state in cheat, and this module owns them.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw slot I/O. A slot is a named string value, written
//!   atomically.
//! - [`bookmark_store::BookmarkStore`]: the bookmark collection. Loads the `bookmarks`
//!   slot once, keeps the collection in memory, and writes it back inside every call
//!   that changes it.
//! - [`group_by_catalog`]: a pure view over [`BookmarkStore::list`]. It is never stored,
//!   so it cannot drift from the collection.
//!
//! ## Failure Model
//!
//! The store trades durability for availability:
//!
//! - **Corrupt or missing data at open**: start empty, log a warning.
//! - **Failed write**: keep the in-memory change, log a warning, report
//!   `persisted: false` in the returned [`bookmark_store::Change`]. No retry.
//!
//! Only an invalid identity (an empty catalog id, section id or example title) is
//! returned as an error.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, one JSON file per slot.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── bookmarks.json      # The bookmark collection (JSON array)
//! ├── config.json         # Configuration
//! └── catalogs/           # Default catalog directory (read by the CLI)
//! ```
//!
//! [`BookmarkStore::list`]: bookmark_store::BookmarkStore::list

use crate::model::Bookmark;
use serde::Serialize;

pub mod backend;
pub mod bookmark_store;
pub mod fs_backend;
pub mod mem_backend;

/// Bookmarks that share a catalog id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkGroup {
    pub catalog_id: String,
    pub bookmarks: Vec<Bookmark>,
}

/// Partitions `bookmarks` by catalog id.
///
/// Groups appear in the order their catalog was first bookmarked, and each group keeps the
/// relative order of its input. Every bookmark lands in exactly one group.
pub fn group_by_catalog(bookmarks: &[Bookmark]) -> Vec<BookmarkGroup> {
    let mut groups: Vec<BookmarkGroup> = Vec::new();
    for bm in bookmarks {
        match groups.iter_mut().find(|g| g.catalog_id == bm.catalog_id) {
            Some(group) => group.bookmarks.push(bm.clone()),
            None => groups.push(BookmarkGroup {
                catalog_id: bm.catalog_id.clone(),
                bookmarks: vec![bm.clone()],
            }),
        }
    }
    groups
}
