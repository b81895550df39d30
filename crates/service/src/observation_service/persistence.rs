use roomlog_core::Observation;
use roomlog_storage::{BlobStore, ObservationStore, clear, persist};

use super::ObservationService;
use crate::ServiceError;

impl<B: BlobStore> ObservationService<B> {
    /// Adds a note to the selected room and persists.
    ///
    /// Rejects a missing room or blank text before touching the store. If the
    /// snapshot cannot be written the in-memory change is rolled back, so memory
    /// and durable state never diverge.
    pub fn add_observation(
        &mut self,
        room_id: Option<&str>,
        text: &str,
    ) -> Result<Observation, ServiceError> {
        let room_id = room_id.filter(|r| !r.trim().is_empty()).ok_or(ServiceError::NoRoomSelected)?;
        if text.trim().is_empty() {
            return Err(ServiceError::InvalidInput("observation text must not be empty".to_owned()));
        }

        let previous = self.store.clone();
        let observation = self.store.add(room_id, text)?;
        if let Err(e) = persist(&mut self.blob, &self.store) {
            self.store = previous;
            tracing::error!(room_id, error = %e, "failed to persist new observation, rolled back");
            return Err(e.into());
        }

        tracing::info!(room_id, observation_id = %observation.id, "observation added");
        Ok(observation)
    }

    /// Deletes a note and persists. Unknown rooms or ids are not an error.
    pub fn delete_observation(
        &mut self,
        room_id: &str,
        observation_id: &str,
    ) -> Result<Option<Observation>, ServiceError> {
        let previous = self.store.clone();
        let removed = self.store.remove(room_id, observation_id);
        if let Err(e) = persist(&mut self.blob, &self.store) {
            self.store = previous;
            tracing::error!(room_id, observation_id, error = %e, "failed to persist deletion, rolled back");
            return Err(e.into());
        }

        if removed.is_some() {
            tracing::info!(room_id, observation_id, "observation deleted");
        } else {
            tracing::debug!(room_id, observation_id, "observation not found, nothing deleted");
        }
        Ok(removed)
    }

    /// Wipes the durable mapping and the in-memory store.
    pub fn clear(&mut self) -> Result<bool, ServiceError> {
        let existed = clear(&mut self.blob)?;
        self.store = ObservationStore::new();
        tracing::info!(existed, "observations cleared");
        Ok(existed)
    }
}
