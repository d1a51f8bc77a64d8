use crate::commands::{CmdMessage, CmdResult};
use crate::library::Library;
use crate::model::Bookmark;
use crate::store::backend::StorageBackend;
use crate::store::bookmark_store::BookmarkStore;

/// Reports bookmarks whose example the library no longer contains (renamed titles,
/// removed sections, unloaded catalogs). With `fix`, removes them.
///
/// An empty library is treated as "nothing loaded" rather than "everything is gone":
/// the check still reports, but `fix` refuses to remove anything.
pub fn run<B: StorageBackend>(
    store: &mut BookmarkStore<B>,
    library: &Library,
    fix: bool,
) -> CmdResult {
    let dangling: Vec<Bookmark> = store
        .list()
        .iter()
        .filter(|b| library.find_example(&b.key()).is_none())
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if dangling.is_empty() {
        result.add_message(CmdMessage::success("All bookmarks point at known examples."));
        return result;
    }

    for bm in &dangling {
        result.add_message(CmdMessage::warning(format!(
            "Missing example: {}",
            bm.key()
        )));
    }

    if !fix {
        result.add_message(CmdMessage::info("Run with --fix to remove them."));
    } else if library.is_empty() {
        result.add_message(CmdMessage::error(
            "No catalogs loaded; refusing to remove bookmarks.",
        ));
    } else {
        for bm in &dangling {
            store.remove_key(&bm.key());
        }
        result.add_message(CmdMessage::success(format!(
            "Removed {} dangling bookmark(s).",
            dangling.len()
        )));
    }

    result.with_affected_bookmarks(dangling)
}
