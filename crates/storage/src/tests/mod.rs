//! Test utilities and module declarations for storage tests.

use crate::{FileBlobStore, ObservationStore};
use tempfile::TempDir;

pub fn create_test_blob() -> (FileBlobStore, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let blob = FileBlobStore::new(temp_dir.path().join("data"));
    (blob, temp_dir)
}

/// Store with two notes in "1-101" (newest "B") and one in "2-205".
pub fn create_test_store() -> ObservationStore {
    let mut store = ObservationStore::new();
    store.add("1-101", "A").expect("add A");
    store.add("1-101", "B").expect("add B");
    store.add("2-205", "Broken TV").expect("add TV");
    store
}

pub fn texts(store: &ObservationStore, room_id: &str) -> Vec<String> {
    store.room(room_id).iter().map(|obs| obs.text.clone()).collect()
}

mod blob_tests;
mod store_tests;
