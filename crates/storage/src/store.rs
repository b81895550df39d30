use std::collections::{BTreeMap, HashSet};

use roomlog_core::Observation;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Room id -> notes, newest first.
///
/// Order within a room is insertion order (index 0 is the latest add), never
/// re-sorted by timestamp. No room holds two notes with the same id.
///
/// Mutators do not persist. Callers own the pairing of every `add` / `remove`
/// with a [`crate::persist`] call; `roomlog_service::ObservationService` does
/// this automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationStore {
    rooms: BTreeMap<String, Vec<Observation>>,
}

impl ObservationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note for `room_id` and puts it at the front of the room's list.
    ///
    /// Blank text or a blank room id is rejected without touching the store.
    pub fn add(&mut self, room_id: &str, text: &str) -> Result<Observation, StorageError> {
        if room_id.trim().is_empty() {
            return Err(StorageError::InvalidInput("room id must not be empty".to_owned()));
        }
        if text.trim().is_empty() {
            return Err(StorageError::InvalidInput("observation text must not be empty".to_owned()));
        }
        let observation = Observation::new(room_id, text);
        self.rooms.entry(room_id.to_owned()).or_default().insert(0, observation.clone());
        Ok(observation)
    }

    /// Removes the note `observation_id` from `room_id`.
    ///
    /// Unknown rooms and ids are a no-op. The room keeps an (possibly empty) list.
    pub fn remove(&mut self, room_id: &str, observation_id: &str) -> Option<Observation> {
        let notes = self.rooms.get_mut(room_id)?;
        let index = notes.iter().position(|obs| obs.id == observation_id)?;
        Some(notes.remove(index))
    }

    /// Notes for `room_id`, newest first; empty for rooms never written.
    #[must_use]
    pub fn room(&self, room_id: &str) -> &[Observation] {
        self.rooms.get(room_id).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn has_observations(&self, room_id: &str) -> bool {
        !self.room(room_id).is_empty()
    }

    pub fn room_ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Observation])> {
        self.rooms.iter().map(|(room_id, notes)| (room_id.as_str(), notes.as_slice()))
    }

    /// Total number of notes across all rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops repeated ids within a room, keeping the first (newest) occurrence.
    ///
    /// Only hand-edited or foreign blobs can contain duplicates.
    pub(crate) fn dedup_ids(&mut self) -> usize {
        let mut dropped = 0usize;
        for notes in self.rooms.values_mut() {
            let mut seen = HashSet::new();
            let before = notes.len();
            notes.retain(|obs| seen.insert(obs.id.clone()));
            dropped += before - notes.len();
        }
        dropped
    }
}
