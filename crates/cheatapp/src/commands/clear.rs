use crate::commands::{CmdMessage, CmdResult};
use crate::store::backend::StorageBackend;
use crate::store::bookmark_store::BookmarkStore;

/// Removes every bookmark in every catalog.
///
/// Without `confirmed`, nothing is removed: the result lists what would go so the caller
/// can ask the user.
pub fn run<B: StorageBackend>(store: &mut BookmarkStore<B>, confirmed: bool) -> CmdResult {
    let existing = store.list().to_vec();
    let count = existing.len();

    let mut result = CmdResult::default().with_affected_bookmarks(existing);
    if count == 0 {
        store.clear_all();
        result.add_message(CmdMessage::info("No bookmarks to clear."));
        return result;
    }

    if !confirmed {
        result.add_message(CmdMessage::warning(format!(
            "This will remove {} {}. Re-run with --yes to confirm.",
            count,
            plural(count)
        )));
        return result;
    }

    store.clear_all();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} {}.",
        count,
        plural(count)
    )));
    result
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "bookmark"
    } else {
        "bookmarks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;

    fn populated() -> BookmarkStore<MemBackend> {
        let mut store = BookmarkStore::open(MemBackend::new());
        store.add("python", "basics", "Intro").unwrap();
        store.add("django", "models", "Fields").unwrap();
        store
    }

    #[test]
    fn unconfirmed_clear_is_a_preview() {
        let mut store = populated();
        let result = run(&mut store, false);
        assert_eq!(store.len(), 2);
        assert_eq!(result.affected_bookmarks.len(), 2);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }

    #[test]
    fn confirmed_clear_empties_every_catalog() {
        let mut store = populated();
        let result = run(&mut store, true);
        assert!(store.is_empty());
        assert_eq!(result.messages[0].content, "Cleared 2 bookmarks.");

        let reopened = BookmarkStore::open(store.into_backend());
        assert!(reopened.is_empty());
    }

    #[test]
    fn clearing_empty_store_is_fine() {
        let mut store = BookmarkStore::open(MemBackend::new());
        let result = run(&mut store, false);
        assert!(result.affected_bookmarks.is_empty());
        assert_eq!(result.messages[0].content, "No bookmarks to clear.");
    }
}
