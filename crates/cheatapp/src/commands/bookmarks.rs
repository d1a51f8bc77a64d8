use crate::commands::{BookmarkEntry, BookmarkGroupView, CmdMessage, CmdResult};
use crate::index::index_bookmarks;
use crate::library::Library;
use crate::store::backend::StorageBackend;
use crate::store::bookmark_store::BookmarkStore;
use crate::store::group_by_catalog;

/// Bookmarks grouped by catalog, optionally restricted to one catalog.
///
/// Entries carry their display index from the ungrouped list. Bookmarks whose catalog is
/// not loaded are still listed, with no catalog title.
pub fn run<B: StorageBackend>(
    store: &BookmarkStore<B>,
    library: &Library,
    catalog_filter: Option<&str>,
) -> CmdResult {
    let list = store.list();
    let indexed = index_bookmarks(list);

    let groups: Vec<BookmarkGroupView> = group_by_catalog(list)
        .into_iter()
        .filter(|g| catalog_filter.map_or(true, |id| g.catalog_id == id))
        .map(|group| {
            let entries = group
                .bookmarks
                .iter()
                .filter_map(|bm| indexed.iter().find(|d| d.bookmark.has_key(&bm.key())))
                .map(|d| BookmarkEntry::resolve(d.clone(), library))
                .collect();
            BookmarkGroupView {
                catalog_title: library.get(&group.catalog_id).map(|c| c.title.clone()),
                catalog_id: group.catalog_id,
                entries,
            }
        })
        .collect();

    let mut result = CmdResult::default().with_bookmark_groups(groups);
    if result.bookmark_groups.is_empty() {
        let msg = match catalog_filter {
            Some(id) => format!("No bookmarks in {}.", id),
            None => "No bookmarks yet.".to_string(),
        };
        result.add_message(CmdMessage::info(msg));
    }
    result
}
