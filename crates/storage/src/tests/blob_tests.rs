#![expect(clippy::unwrap_used, reason = "test code")]

use super::create_test_blob;
use crate::{BlobStore, FileBlobStore, MemoryBlobStore};

#[test]
fn test_file_blob_round_trip() {
    let (mut blob, _temp_dir) = create_test_blob();
    assert_eq!(blob.read("notes").unwrap(), None);
    blob.write("notes", "{}").unwrap();
    assert_eq!(blob.read("notes").unwrap().as_deref(), Some("{}"));
    assert!(blob.path_for("notes").unwrap().exists());
}

#[test]
fn test_file_blob_creates_missing_dir() {
    let (mut blob, _temp_dir) = create_test_blob();
    assert!(!blob.dir().exists());
    blob.write("notes", "[]").unwrap();
    assert!(blob.dir().is_dir());
}

#[test]
fn test_file_blob_leaves_no_temp_files() {
    let (mut blob, _temp_dir) = create_test_blob();
    blob.write("notes", "one").unwrap();
    blob.write("notes", "two").unwrap();
    let entries: Vec<_> = std::fs::read_dir(blob.dir()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(blob.read("notes").unwrap().as_deref(), Some("two"));
}

#[test]
fn test_file_blob_rejects_path_like_keys() {
    let blob = FileBlobStore::new("/tmp");
    for key in ["", "../escape", "a/b", "a\\b", ".hidden"] {
        assert!(blob.path_for(key).unwrap_err().is_invalid_input(), "key {key:?}");
    }
}

#[test]
fn test_file_blob_remove() {
    let (mut blob, _temp_dir) = create_test_blob();
    assert!(!blob.remove("notes").unwrap());
    blob.write("notes", "x").unwrap();
    assert!(blob.remove("notes").unwrap());
    assert_eq!(blob.read("notes").unwrap(), None);
}

#[test]
fn test_file_blob_rename() {
    let (mut blob, _temp_dir) = create_test_blob();
    assert!(!blob.rename("notes", "notes.old").unwrap());
    blob.write("notes", "x").unwrap();
    assert!(blob.rename("notes", "notes.old").unwrap());
    assert_eq!(blob.read("notes").unwrap(), None);
    assert_eq!(blob.read("notes.old").unwrap().as_deref(), Some("x"));
}

#[test]
fn test_memory_blob_rename_through_mut_ref() {
    let mut blob = MemoryBlobStore::new();
    blob.write("notes", "x").unwrap();
    assert!(rename_through(&mut blob, "notes", "moved"));
    assert_eq!(blob.keys().collect::<Vec<_>>(), vec!["moved"]);
}

fn rename_through(mut blob: impl BlobStore, from: &str, to: &str) -> bool {
    blob.rename(from, to).unwrap()
}
