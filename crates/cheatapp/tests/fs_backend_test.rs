use cheatapp::model::BookmarkKey;
use cheatapp::store::backend::StorageBackend;
use cheatapp::store::bookmark_store::{BookmarkStore, BOOKMARKS_SLOT};
use cheatapp::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn assert_no_tmp_files(dir: &TempDir) {
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_slot_io() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read_slot("things").unwrap(), None);

    backend.write_slot("things", "[1,2]").unwrap();
    assert_eq!(backend.read_slot("things").unwrap().as_deref(), Some("[1,2]"));

    backend.write_slot("things", "[]").unwrap();
    assert_eq!(backend.read_slot("things").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write_slot(BOOKMARKS_SLOT, "[]").unwrap();

    let expected_path = dir.path().join("bookmarks.json");
    assert!(expected_path.exists());
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[]");
    assert_no_tmp_files(&dir);
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());
    backend.write_slot("x", "1").unwrap();
    assert!(nested.join("x.json").exists());
}

#[test]
fn test_bookmarks_survive_reopen() {
    let (dir, backend) = setup();
    let mut store = BookmarkStore::open(backend);
    store.add("python", "files", "Reading files").unwrap();
    store.add("django", "models", "Fields").unwrap();
    let before = store.list().to_vec();
    drop(store);

    let reopened = BookmarkStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(reopened.list(), before.as_slice());
    assert_no_tmp_files(&dir);
}

#[test]
fn test_persisted_format_is_a_camel_case_array() {
    let (dir, backend) = setup();
    let mut store = BookmarkStore::open(backend);
    store.add("python", "files", "Reading files").unwrap();

    let raw = fs::read_to_string(dir.path().join("bookmarks.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value.as_array().unwrap()[0];
    assert_eq!(record["catalogId"], "python");
    assert_eq!(record["sectionId"], "files");
    assert_eq!(record["exampleTitle"], "Reading files");
    assert!(record["timestamp"].is_i64());
}

#[test]
fn test_corrupt_file_opens_empty_and_is_replaced() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("bookmarks.json"), "{not json").unwrap();

    let mut store = BookmarkStore::open(backend);
    assert!(store.is_empty());

    store.add("python", "files", "Reading files").unwrap();
    let reopened = BookmarkStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_clear_all_persists() {
    let (dir, backend) = setup();
    let mut store = BookmarkStore::open(backend);
    store.add("python", "files", "Reading files").unwrap();
    store.add("rust", "errors", "The ? operator").unwrap();
    store.clear_all();

    let reopened = BookmarkStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert!(reopened.is_empty());
}

#[test]
fn test_unwritable_root_keeps_memory_state() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let mut store = BookmarkStore::open(FsBackend::new(blocker.join("data")));
    let change = store.add("python", "files", "Reading files").unwrap();
    assert!(change.changed);
    assert!(!change.persisted);
    assert!(store.contains(&BookmarkKey::new("python", "files", "Reading files")));
}
