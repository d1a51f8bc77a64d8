use crate::commands::{catalog_or_err, CatalogSummary, CmdResult, ExampleView, SectionView};
use crate::error::Result;
use crate::library::Library;
use crate::model::{BookmarkKey, Section};
use crate::search::{filter, Query};
use crate::store::backend::StorageBackend;
use crate::store::bookmark_store::BookmarkStore;

/// Renders `catalog_id` through the filter engine. A blank query lists every section.
pub fn run<B: StorageBackend>(
    library: &Library,
    store: &BookmarkStore<B>,
    catalog_id: &str,
    query: &str,
) -> Result<CmdResult> {
    let catalog = catalog_or_err(library, catalog_id)?;
    let prepared = Query::new(query);

    let sections = filter(catalog, query)
        .into_iter()
        .map(|s| section_view(catalog_id, s, &prepared, store))
        .collect();

    let query = (!prepared.is_empty()).then(|| query.to_string());
    Ok(CmdResult::default()
        .with_sections(CatalogSummary::new(catalog_id, catalog), sections)
        .with_query(query))
}

fn section_view<B: StorageBackend>(
    catalog_id: &str,
    section: &Section,
    query: &Query,
    store: &BookmarkStore<B>,
) -> SectionView {
    let examples = section
        .examples
        .iter()
        .map(|e| ExampleView {
            title: e.title.clone(),
            description: e.description.clone(),
            code: e.code.clone(),
            language: e.language.clone(),
            matched: !query.is_empty() && query.matches_example(e),
            bookmarked: store.contains(&BookmarkKey::new(catalog_id, &section.id, &e.title)),
        })
        .collect();

    SectionView {
        id: section.id.clone(),
        title: section.title.clone(),
        description: section.description.clone(),
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::error::CheatError;
    use crate::store::mem_backend::MemBackend;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn blank_query_shows_all_sections() {
        let store = BookmarkStore::open(MemBackend::new());
        let result = run(&fixtures::library(), &store, "python", "").unwrap();
        assert_eq!(ids(&result), vec!["basics", "adv"]);
        assert_eq!(result.query, None);
        assert!(result
            .sections
            .iter()
            .flat_map(|s| &s.examples)
            .all(|e| !e.matched));
    }

    #[test]
    fn filters_by_code_and_flags_matching_examples() {
        let store = BookmarkStore::open(MemBackend::new());
        let result = run(&fixtures::library(), &store, "python", "PRINT(1)").unwrap();
        assert_eq!(ids(&result), vec!["basics"]);
        assert!(result.sections[0].examples[0].matched);
        assert_eq!(result.query.as_deref(), Some("PRINT(1)"));
    }

    #[test]
    fn marks_bookmarked_examples() {
        let mut store = BookmarkStore::open(MemBackend::new());
        store.add("python", "adv", "Deep dive").unwrap();
        let result = run(&fixtures::library(), &store, "python", "").unwrap();
        assert!(!result.sections[0].examples[0].bookmarked);
        assert!(result.sections[1].examples[0].bookmarked);
    }

    #[test]
    fn bookmarks_in_other_catalogs_do_not_leak() {
        let mut store = BookmarkStore::open(MemBackend::new());
        store.add("django", "basics", "Intro").unwrap();
        let result = run(&fixtures::library(), &store, "python", "").unwrap();
        assert!(!result.sections[0].examples[0].bookmarked);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let store = BookmarkStore::open(MemBackend::new());
        let result = run(&fixtures::library(), &store, "python", "haskell").unwrap();
        assert!(result.sections.is_empty());
        assert_eq!(result.catalog.unwrap().id, "python");
    }

    #[test]
    fn unknown_catalog_is_an_error() {
        let store = BookmarkStore::open(MemBackend::new());
        let err = run(&fixtures::library(), &store, "rust", "").unwrap_err();
        assert!(matches!(err, CheatError::CatalogNotFound(id) if id == "rust"));
    }
}
