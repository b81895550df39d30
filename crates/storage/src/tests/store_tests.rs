#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_store, texts};
use crate::ObservationStore;

#[test]
fn test_add_prepends_newest_first() {
    let mut store = ObservationStore::new();
    store.add("101", "A").unwrap();
    store.add("101", "B").unwrap();
    assert_eq!(texts(&store, "101"), vec!["B", "A"]);
}

#[test]
fn test_add_trims_and_stamps() {
    let before = now_millis();
    let mut store = ObservationStore::new();
    let obs = store.add("1-101", "  Loose hinge  ").unwrap();
    assert_eq!(obs.text, "Loose hinge");
    assert_eq!(obs.room_id, "1-101");
    assert!(obs.timestamp >= before);
    assert_eq!(store.room("1-101"), [obs]);
}

#[test]
fn test_add_rejects_blank_text_without_mutation() {
    let mut store = create_test_store();
    let snapshot = store.clone();
    let err = store.add("1-101", "   \t ").unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(store, snapshot);
}

#[test]
fn test_add_rejects_blank_room() {
    let mut store = ObservationStore::new();
    assert!(store.add("  ", "Leaky faucet").unwrap_err().is_invalid_input());
    assert!(store.is_empty());
    assert_eq!(store.room_ids().count(), 0);
}

#[test]
fn test_add_then_remove_restores_room() {
    let mut store = create_test_store();
    let before = store.room("1-101").to_vec();
    let obs = store.add("1-101", "Temporary").unwrap();
    let removed = store.remove("1-101", &obs.id);
    assert_eq!(removed, Some(obs));
    assert_eq!(store.room("1-101"), before.as_slice());
}

#[test]
fn test_remove_middle_keeps_order() {
    let mut store = ObservationStore::new();
    store.add("101", "A").unwrap();
    let middle = store.add("101", "B").unwrap();
    store.add("101", "C").unwrap();
    store.remove("101", &middle.id).unwrap();
    assert_eq!(texts(&store, "101"), vec!["C", "A"]);
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut store = create_test_store();
    let snapshot = store.clone();
    assert!(store.remove("1-101", "no-such-id").is_none());
    assert!(store.remove("9-999", "no-such-id").is_none());
    assert_eq!(store, snapshot);
}

#[test]
fn test_remove_uses_room_scope() {
    let mut store = create_test_store();
    let tv = store.room("2-205")[0].clone();
    assert!(store.remove("1-101", &tv.id).is_none());
    assert!(store.has_observations("2-205"));
}

#[test]
fn test_removing_last_note_keeps_empty_room() {
    let mut store = ObservationStore::new();
    let obs = store.add("3-301", "Light bulb out").unwrap();
    store.remove("3-301", &obs.id).unwrap();
    assert!(!store.has_observations("3-301"));
    assert_eq!(store.room_ids().collect::<Vec<_>>(), vec!["3-301"]);
    assert!(store.is_empty());
}

#[test]
fn test_unknown_room_reads_empty() {
    let store = create_test_store();
    assert!(store.room("does-not-exist").is_empty());
    assert_eq!(store.len(), 3);
    assert_eq!(store.iter().count(), 2);
}

#[test]
fn test_ids_unique_within_room() {
    let mut store = ObservationStore::new();
    for i in 0..50 {
        store.add("101", &format!("note {i}")).unwrap();
    }
    let ids: std::collections::HashSet<_> = store.room("101").iter().map(|o| &o.id).collect();
    assert_eq!(ids.len(), 50);
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap())
        .unwrap()
}
