//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for cheat operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., turning `unmark 1-3` arguments into selectors)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Catalog discovery**: the caller builds the [`Library`] and hands it over
//!
//! ## Generic Over StorageBackend
//!
//! `CheatApi<B: StorageBackend>` is generic over where the bookmark slot lives:
//! - Production: `CheatApi<FsBackend>`
//! - Testing: `CheatApi<MemBackend>`

use crate::commands;
use crate::error::{CheatError, Result};
use crate::index::parse_selectors;
use crate::library::Library;
use crate::model::BookmarkKey;
use crate::store::backend::StorageBackend;
use crate::store::bookmark_store::BookmarkStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CheatPaths, CmdMessage, CmdResult, MessageLevel};

/// The main API facade for cheat operations.
pub struct CheatApi<B: StorageBackend> {
    library: Library,
    bookmarks: BookmarkStore<B>,
    paths: CheatPaths,
}

impl<B: StorageBackend> CheatApi<B> {
    /// Opens the bookmark store on `backend`. Never fails: unreadable bookmark data
    /// starts an empty collection.
    pub fn new(library: Library, backend: B, paths: CheatPaths) -> Self {
        Self {
            library,
            bookmarks: BookmarkStore::open(backend),
            paths,
        }
    }

    pub fn catalogs(&self) -> CmdResult {
        commands::catalogs::run(&self.library)
    }

    pub fn search(&self, catalog_id: &str, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.library, &self.bookmarks, catalog_id, query)
    }

    pub fn add_bookmark(
        &mut self,
        catalog_id: &str,
        section_id: &str,
        example_title: &str,
    ) -> Result<CmdResult> {
        let key = BookmarkKey::new(catalog_id, section_id, example_title);
        commands::bookmark::add(&mut self.bookmarks, &self.library, key)
    }

    /// Removes bookmarks given as display indexes (`1`, `2-4`) or as a single
    /// `<catalog> <section> <title words...>` identity.
    pub fn remove_bookmarks<I: AsRef<str>>(&mut self, args: &[I]) -> Result<CmdResult> {
        let selectors =
            parse_selectors(args, self.bookmarks.len()).map_err(CheatError::Api)?;
        commands::bookmark::remove(&mut self.bookmarks, &selectors)
    }

    pub fn bookmarks(&self, catalog_filter: Option<&str>) -> CmdResult {
        commands::bookmarks::run(&self.bookmarks, &self.library, catalog_filter)
    }

    pub fn clear_bookmarks(&mut self, confirmed: bool) -> CmdResult {
        commands::clear::run(&mut self.bookmarks, confirmed)
    }

    pub fn doctor(&mut self, fix: bool) -> CmdResult {
        commands::doctor::run(&mut self.bookmarks, &self.library, fix)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &BookmarkStore<B> {
        &self.bookmarks
    }

    pub fn paths(&self) -> &CheatPaths {
        &self.paths
    }
}
