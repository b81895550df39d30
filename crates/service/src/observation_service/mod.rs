mod persistence;

use roomlog_core::constants::DEFAULT_SUGGESTION_LIMIT;
use roomlog_core::{IssueDictionary, Observation};
use roomlog_storage::{BlobStore, ObservationStore, recover};

use crate::ServiceError;

/// Observation workflow for one device.
///
/// Owns the durable blob exclusively: the store is hydrated once in
/// [`ObservationService::open`] and every successful mutation writes a full
/// snapshot back before returning.
pub struct ObservationService<B: BlobStore> {
    pub(crate) blob: B,
    pub(crate) store: ObservationStore,
    issues: IssueDictionary,
    suggestion_limit: usize,
}

impl<B: BlobStore> ObservationService<B> {
    /// Hydrates from `blob`.
    ///
    /// A corrupt blob is moved aside and the service starts empty. A failed
    /// read is returned instead, since writing a snapshot over a blob that
    /// could not be read would erase it.
    pub fn open(mut blob: B) -> Result<Self, ServiceError> {
        let store = recover(&mut blob)?;
        Ok(Self {
            blob,
            store,
            issues: IssueDictionary::builtin(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        })
    }

    #[must_use]
    pub fn with_issues(mut self, issues: IssueDictionary) -> Self {
        self.issues = issues;
        self
    }

    #[must_use]
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Notes for one room, newest first.
    #[must_use]
    pub fn observations(&self, room_id: &str) -> &[Observation] {
        self.store.room(room_id)
    }

    #[must_use]
    pub fn store(&self) -> &ObservationStore {
        &self.store
    }

    /// Known issues matching `query`, for autocompleting a new note.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.issues.suggest(query, self.suggestion_limit)
    }

    pub fn into_blob(self) -> B {
        self.blob
    }
}
