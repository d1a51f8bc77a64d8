use super::backend::StorageBackend;
use crate::error::{CheatError, Result};
use crate::model::{Bookmark, BookmarkKey};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

/// Name of the slot holding the serialized collection. The format carries no version, so
/// changing the record shape breaks existing data.
pub const BOOKMARKS_SLOT: &str = "bookmarks";

/// What a mutating call did.
///
/// `persisted` is false only when the collection changed in memory but could not be
/// written to the backend. No-op calls report `changed: false, persisted: true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Change {
    pub changed: bool,
    pub persisted: bool,
}

impl Change {
    fn unchanged() -> Self {
        Self {
            changed: false,
            persisted: true,
        }
    }
}

/// The authoritative bookmark collection for a session.
///
/// The collection is loaded once in [`BookmarkStore::open`] and written back through the
/// backend inside every call that changes it, before the call returns.
pub struct BookmarkStore<B: StorageBackend> {
    backend: B,
    bookmarks: Vec<Bookmark>,
    last_timestamp: i64,
}

impl<B: StorageBackend> BookmarkStore<B> {
    /// Opens the store. Never fails: missing, unreadable or corrupt data yields an empty
    /// collection.
    pub fn open(backend: B) -> Self {
        let bookmarks = load(&backend);
        let last_timestamp = bookmarks.iter().map(|b| b.timestamp).max().unwrap_or(0);
        debug!(count = bookmarks.len(), "bookmark store opened");
        Self {
            backend,
            bookmarks,
            last_timestamp,
        }
    }

    pub fn add(
        &mut self,
        catalog_id: &str,
        section_id: &str,
        example_title: &str,
    ) -> Result<Change> {
        self.insert(BookmarkKey::new(catalog_id, section_id, example_title))
    }

    /// Adds a bookmark for `key`. Adding a key that is already present is a no-op.
    pub fn insert(&mut self, key: BookmarkKey) -> Result<Change> {
        if let Some(part) = key.missing_part() {
            return Err(CheatError::InvalidBookmark(format!(
                "{} must not be empty",
                part
            )));
        }
        if self.contains(&key) {
            return Ok(Change::unchanged());
        }

        let timestamp = self.next_timestamp();
        debug!(bookmark = %key, timestamp, "adding bookmark");
        self.bookmarks.push(Bookmark::new(key, timestamp));
        Ok(self.commit())
    }

    pub fn remove(&mut self, catalog_id: &str, section_id: &str, example_title: &str) -> Change {
        self.remove_key(&BookmarkKey::new(catalog_id, section_id, example_title))
    }

    /// Removes the bookmark for `key` if present.
    pub fn remove_key(&mut self, key: &BookmarkKey) -> Change {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| !b.has_key(key));
        if self.bookmarks.len() == before {
            return Change::unchanged();
        }
        debug!(bookmark = %key, "removed bookmark");
        self.commit()
    }

    /// Empties the collection, across every catalog.
    pub fn clear_all(&mut self) -> Change {
        let had_any = !self.bookmarks.is_empty();
        self.bookmarks.clear();
        debug!("cleared all bookmarks");
        let mut change = self.commit();
        change.changed = had_any;
        change
    }

    /// All bookmarks in insertion order.
    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn contains(&self, key: &BookmarkKey) -> bool {
        self.bookmarks.iter().any(|b| b.has_key(key))
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn next_timestamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let ts = now.max(self.last_timestamp.saturating_add(1));
        self.last_timestamp = ts;
        ts
    }

    fn commit(&self) -> Change {
        let persisted = match encode(&self.bookmarks)
            .and_then(|raw| self.backend.write_slot(BOOKMARKS_SLOT, &raw))
        {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "bookmarks changed in memory but were not saved");
                false
            }
        };
        Change {
            changed: true,
            persisted,
        }
    }
}

/// Serializes a collection into the slot format.
pub fn encode(bookmarks: &[Bookmark]) -> Result<String> {
    serde_json::to_string_pretty(bookmarks).map_err(CheatError::Serialization)
}

/// Parses the slot format. Duplicate identities keep their first record.
pub fn decode(raw: &str) -> Result<Vec<Bookmark>> {
    let parsed: Vec<Bookmark> = serde_json::from_str(raw).map_err(CheatError::Serialization)?;
    let mut bookmarks: Vec<Bookmark> = Vec::with_capacity(parsed.len());
    for bm in parsed {
        let key = bm.key();
        if bookmarks.iter().any(|b| b.has_key(&key)) {
            debug!(bookmark = %key, "dropping duplicate bookmark record");
            continue;
        }
        bookmarks.push(bm);
    }
    Ok(bookmarks)
}

fn load<B: StorageBackend>(backend: &B) -> Vec<Bookmark> {
    match backend.read_slot(BOOKMARKS_SLOT) {
        Ok(None) => Vec::new(),
        Ok(Some(raw)) => decode(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable bookmark data");
            Vec::new()
        }),
        Err(e) => {
            warn!(error = %e, "bookmark storage unavailable, starting empty");
            Vec::new()
        }
    }
}
