use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CheatError, Result};
use crate::index::BookmarkSelector;
use crate::library::Library;
use crate::model::{Bookmark, BookmarkKey};
use crate::store::backend::StorageBackend;
use crate::store::bookmark_store::BookmarkStore;

/// Bookmarks an example. The example must exist in the library.
pub fn add<B: StorageBackend>(
    store: &mut BookmarkStore<B>,
    library: &Library,
    key: BookmarkKey,
) -> Result<CmdResult> {
    if let Some(part) = key.missing_part() {
        return Err(CheatError::InvalidBookmark(format!(
            "{} must not be empty",
            part
        )));
    }
    if library.get(&key.catalog_id).is_none() {
        return Err(CheatError::CatalogNotFound(key.catalog_id));
    }
    if library.find_example(&key).is_none() {
        return Err(CheatError::ExampleNotFound(key));
    }

    let mut result = CmdResult::default();
    let change = store.insert(key.clone())?;
    if change.changed {
        result.add_message(CmdMessage::success(format!("Bookmarked: {}", key)));
    } else {
        result.add_message(CmdMessage::info(format!("Already bookmarked: {}", key)));
    }

    let added = store.list().iter().filter(|b| b.has_key(&key)).cloned();
    Ok(result.with_affected_bookmarks(added.collect()))
}

/// Removes bookmarks by index or identity.
///
/// All indexes are resolved against the collection as it was before the call, so
/// `remove 1 2` removes the first two bookmarks. An unknown index fails the whole call
/// before anything is removed; an identity that is not bookmarked is reported and skipped.
pub fn remove<B: StorageBackend>(
    store: &mut BookmarkStore<B>,
    selectors: &[BookmarkSelector],
) -> Result<CmdResult> {
    let keys = resolve(store.list(), selectors)?;

    let mut result = CmdResult::default();
    let mut removed: Vec<Bookmark> = Vec::new();
    for key in keys {
        let existing = store.list().iter().find(|b| b.has_key(&key)).cloned();
        match existing {
            Some(bm) => {
                store.remove_key(&key);
                result.add_message(CmdMessage::success(format!("Removed bookmark: {}", key)));
                removed.push(bm);
            }
            None => {
                result.add_message(CmdMessage::info(format!("Not bookmarked: {}", key)));
            }
        }
    }
    Ok(result.with_affected_bookmarks(removed))
}

fn resolve(list: &[Bookmark], selectors: &[BookmarkSelector]) -> Result<Vec<BookmarkKey>> {
    let mut keys: Vec<BookmarkKey> = Vec::new();
    for selector in selectors {
        let key = match selector {
            BookmarkSelector::Index(i) => i
                .checked_sub(1)
                .and_then(|n| list.get(n))
                .map(|b| b.key())
                .ok_or_else(|| CheatError::Api(format!("Bookmark {} not found", i)))?,
            BookmarkSelector::Key(k) => k.clone(),
        };
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    Ok(keys)
}
