use crate::error::Result;

/// Abstract interface for raw slot I/O.
///
/// A slot is a named string value, the durable equivalent of a key in a local key-value
/// store. This trait handles the "how" (filesystem vs memory), while
/// [`BookmarkStore`](super::bookmark_store::BookmarkStore) handles the "what".
pub trait StorageBackend {
    /// Read a slot. Returns `Ok(None)` if the slot was never written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value.
    /// MUST be atomic (e.g. write to tmp then rename) so readers never see a partial value.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}
