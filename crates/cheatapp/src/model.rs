//! # Data Model
//!
//! Two families of types live here:
//!
//! - **Catalog content** ([`Catalog`], [`Section`], [`Example`]): the read-only shape of a
//!   cheat sheet. It is supplied whole by whoever loads the content; nothing in this crate
//!   ever mutates it.
//! - **Bookmarks** ([`Bookmark`], [`BookmarkKey`]): references to a single example, owned
//!   exclusively by [`crate::store::bookmark_store::BookmarkStore`].
//!
//! Within one catalog, `(section id, example title)` identifies an example. Adding the
//! catalog id gives the bookmark identity, [`BookmarkKey`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Catalog {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn example_count(&self) -> usize {
        self.sections.iter().map(|s| s.examples.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            examples: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    pub fn example(&self, title: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.title == title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    /// Display hint for syntax highlighting. Ignored by search and bookmarks.
    #[serde(default)]
    pub language: String,
}

impl Example {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            code: code.into(),
            language: String::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Identity of a bookmark: which catalog, which section, which example.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkKey {
    pub catalog_id: String,
    pub section_id: String,
    pub example_title: String,
}

impl BookmarkKey {
    pub fn new(
        catalog_id: impl Into<String>,
        section_id: impl Into<String>,
        example_title: impl Into<String>,
    ) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            section_id: section_id.into(),
            example_title: example_title.into(),
        }
    }

    /// Name of the first empty identity part, if any.
    pub fn missing_part(&self) -> Option<&'static str> {
        if self.catalog_id.is_empty() {
            Some("catalog id")
        } else if self.section_id.is_empty() {
            Some("section id")
        } else if self.example_title.is_empty() {
            Some("example title")
        } else {
            None
        }
    }

    fn matches(&self, catalog_id: &str, section_id: &str, example_title: &str) -> bool {
        self.catalog_id == catalog_id
            && self.section_id == section_id
            && self.example_title == example_title
    }
}

impl fmt::Display for BookmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.catalog_id, self.section_id, self.example_title
        )
    }
}

/// A persisted reference to one example.
///
/// The on-disk shape is `{"catalogId", "sectionId", "exampleTitle", "timestamp"}`.
/// Records are immutable once created; equality for deduplication uses [`Bookmark::key`]
/// only, never the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub catalog_id: String,
    pub section_id: String,
    pub example_title: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Bookmark {
    pub fn new(key: BookmarkKey, timestamp: i64) -> Self {
        Self {
            catalog_id: key.catalog_id,
            section_id: key.section_id,
            example_title: key.example_title,
            timestamp,
        }
    }

    pub fn key(&self) -> BookmarkKey {
        BookmarkKey::new(
            self.catalog_id.clone(),
            self.section_id.clone(),
            self.example_title.clone(),
        )
    }

    pub fn has_key(&self, key: &BookmarkKey) -> bool {
        key.matches(&self.catalog_id, &self.section_id, &self.example_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_serializes_with_camel_case_fields() {
        let bm = Bookmark::new(BookmarkKey::new("python", "basics", "Intro"), 42);
        let json = serde_json::to_value(&bm).unwrap();
        assert_eq!(json["catalogId"], "python");
        assert_eq!(json["sectionId"], "basics");
        assert_eq!(json["exampleTitle"], "Intro");
        assert_eq!(json["timestamp"], 42);
    }

    #[test]
    fn has_key_ignores_timestamp() {
        let key = BookmarkKey::new("python", "basics", "Intro");
        let a = Bookmark::new(key.clone(), 1);
        let b = Bookmark::new(key.clone(), 2);
        assert!(a.has_key(&key));
        assert!(b.has_key(&key));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn missing_part_reports_first_empty_field() {
        assert_eq!(
            BookmarkKey::new("", "basics", "Intro").missing_part(),
            Some("catalog id")
        );
        assert_eq!(
            BookmarkKey::new("python", "basics", "").missing_part(),
            Some("example title")
        );
        assert_eq!(BookmarkKey::new("a", "b", "c").missing_part(), None);
    }

    #[test]
    fn catalog_defaults_optional_fields() {
        let json = r#"{"title":"Python","sections":[{"id":"basics","title":"Basics","examples":[{"title":"Intro"}]}]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.description, "");
        let example = catalog.section("basics").unwrap().example("Intro").unwrap();
        assert_eq!(example.code, "");
        assert_eq!(example.language, "");
    }
}
