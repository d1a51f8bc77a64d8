//! # Command Layer
//!
//! This module contains the **business logic** of cheat. Each command lives in its own
//! submodule and implements plain Rust functions over the library, the bookmark store and
//! the types in [`crate::model`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **User interaction**: no prompts; [`clear`] returns a preview instead of asking
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The UI layer decides how to render it.
//!
//! ## Testing Strategy
//!
//! Command tests use [`MemBackend`](crate::store::mem_backend::MemBackend) and a small
//! in-code library, so they never touch the filesystem.
//!
//! ## Command Modules
//!
//! - [`catalogs`]: Summaries of the loaded catalogs
//! - [`search`]: Filter a catalog's sections by a query
//! - [`bookmark`]: Add and remove bookmarks
//! - [`bookmarks`]: Grouped bookmark listing
//! - [`clear`]: Remove every bookmark
//! - [`doctor`]: Find bookmarks whose example is no longer in the library
//! - [`config`]: Manage configuration

use crate::config::CheatConfig;
use crate::error::{CheatError, Result};
use crate::index::DisplayBookmark;
use crate::library::Library;
use crate::model::{Bookmark, Catalog, Example};
use serde::Serialize;
use std::path::PathBuf;

pub mod bookmark;
pub mod bookmarks;
pub mod catalogs;
pub mod clear;
pub mod config;
pub mod doctor;
pub mod search;

#[derive(Debug, Clone)]
pub struct CheatPaths {
    pub data: PathBuf,
    pub catalogs: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub section_count: usize,
    pub example_count: usize,
}

impl CatalogSummary {
    pub fn new(id: &str, catalog: &Catalog) -> Self {
        Self {
            id: id.to_string(),
            title: catalog.title.clone(),
            description: catalog.description.clone(),
            section_count: catalog.sections.len(),
            example_count: catalog.example_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleView {
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: String,
    /// The example itself contains the query.
    pub matched: bool,
    pub bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<ExampleView>,
}

/// A bookmark with its display index and, when the library still has it, its example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkEntry {
    pub index: usize,
    pub bookmark: Bookmark,
    pub section_title: Option<String>,
    pub example: Option<Example>,
}

impl BookmarkEntry {
    pub fn resolve(display: DisplayBookmark, library: &Library) -> Self {
        let found = library.find_example(&display.bookmark.key());
        Self {
            index: display.index,
            section_title: found.map(|(s, _)| s.title.clone()),
            example: found.map(|(_, e)| e.clone()),
            bookmark: display.bookmark,
        }
    }

    /// The bookmark points at an example the library does not contain.
    pub fn is_dangling(&self) -> bool {
        self.example.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkGroupView {
    pub catalog_id: String,
    pub catalog_title: Option<String>,
    pub entries: Vec<BookmarkEntry>,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub catalogs: Vec<CatalogSummary>,
    pub catalog: Option<CatalogSummary>,
    pub query: Option<String>,
    pub sections: Vec<SectionView>,
    pub bookmark_groups: Vec<BookmarkGroupView>,
    pub affected_bookmarks: Vec<Bookmark>,
    pub config: Option<CheatConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_catalogs(mut self, catalogs: Vec<CatalogSummary>) -> Self {
        self.catalogs = catalogs;
        self
    }

    pub fn with_sections(mut self, catalog: CatalogSummary, sections: Vec<SectionView>) -> Self {
        self.catalog = Some(catalog);
        self.sections = sections;
        self
    }

    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    pub fn with_bookmark_groups(mut self, groups: Vec<BookmarkGroupView>) -> Self {
        self.bookmark_groups = groups;
        self
    }

    pub fn with_affected_bookmarks(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.affected_bookmarks = bookmarks;
        self
    }

    pub fn with_config(mut self, config: CheatConfig) -> Self {
        self.config = Some(config);
        self
    }
}

pub(crate) fn catalog_or_err<'a>(library: &'a Library, id: &str) -> Result<&'a Catalog> {
    library
        .get(id)
        .ok_or_else(|| CheatError::CatalogNotFound(id.to_string()))
}
