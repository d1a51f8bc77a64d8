//! The set of catalogs available to a session, keyed by catalog id.
//!
//! A [`Library`] is filled by whatever loads the content (the CLI reads JSON files, a
//! web client might embed them) and is read-only afterwards.

use crate::model::{BookmarkKey, Catalog, Example, Section};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Library {
    catalogs: BTreeMap<String, Catalog>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, id: impl Into<String>, catalog: Catalog) -> Self {
        self.insert(id, catalog);
        self
    }

    /// Adds a catalog, replacing any previous catalog with the same id.
    pub fn insert(&mut self, id: impl Into<String>, catalog: Catalog) {
        self.catalogs.insert(id.into(), catalog);
    }

    pub fn get(&self, id: &str) -> Option<&Catalog> {
        self.catalogs.get(id)
    }

    /// Catalogs sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Catalog)> {
        self.catalogs.iter().map(|(id, c)| (id.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Resolves a bookmark identity to the section and example it points at.
    pub fn find_example(&self, key: &BookmarkKey) -> Option<(&Section, &Example)> {
        let section = self.get(&key.catalog_id)?.section(&key.section_id)?;
        let example = section.example(&key.example_title)?;
        Some((section, example))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Example, Section};

    fn library() -> Library {
        let catalog = Catalog::new("Python", "").with_section(
            Section::new("basics", "Basics", "").with_example(Example::new("Intro", "", "")),
        );
        Library::new().with_catalog("python", catalog)
    }

    #[test]
    fn find_example_resolves_full_key() {
        let lib = library();
        let (section, example) = lib
            .find_example(&BookmarkKey::new("python", "basics", "Intro"))
            .unwrap();
        assert_eq!(section.title, "Basics");
        assert_eq!(example.title, "Intro");
    }

    #[test]
    fn find_example_misses_on_any_wrong_part() {
        let lib = library();
        assert!(lib
            .find_example(&BookmarkKey::new("django", "basics", "Intro"))
            .is_none());
        assert!(lib
            .find_example(&BookmarkKey::new("python", "adv", "Intro"))
            .is_none());
        assert!(lib
            .find_example(&BookmarkKey::new("python", "basics", "intro"))
            .is_none());
    }

    #[test]
    fn iterates_in_id_order() {
        let lib = library().with_catalog("django", Catalog::new("Django", ""));
        let ids: Vec<&str> = lib.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["django", "python"]);
    }
}
