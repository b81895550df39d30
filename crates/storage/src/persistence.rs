//! Snapshot load / persist of the whole observation mapping.

use chrono::Utc;
use roomlog_core::constants::STORAGE_KEY;

use crate::blob::BlobStore;
use crate::error::StorageError;
use crate::store::ObservationStore;

/// Reads the mapping, surfacing read and parse failures.
///
/// A blob that was never written is an empty store, not an error.
pub fn try_load(blob: &impl BlobStore) -> Result<ObservationStore, StorageError> {
    let Some(raw) = blob.read(STORAGE_KEY)? else {
        return Ok(ObservationStore::new());
    };
    let mut store: ObservationStore = serde_json::from_str(&raw)?;
    let dropped = store.dedup_ids();
    if dropped > 0 {
        tracing::warn!(dropped, "dropped duplicate observation ids while loading");
    }
    Ok(store)
}

/// Hydrates the mapping for a caller that will write it back.
///
/// An unparsable blob is moved aside under a `corrupt-<millis>` key and an
/// empty store is returned, so the next snapshot cannot overwrite it. Read
/// failures are returned: the blob may be intact, and persisting an empty
/// store over it would destroy every note.
pub fn recover(blob: &mut impl BlobStore) -> Result<ObservationStore, StorageError> {
    match try_load(&*blob) {
        Ok(store) => {
            tracing::debug!(observations = store.len(), "loaded observations");
            Ok(store)
        },
        Err(e) if e.is_corruption() => {
            let quarantine = quarantine_key(Utc::now().timestamp_millis());
            blob.rename(STORAGE_KEY, &quarantine)?;
            tracing::warn!(error = %e, quarantine = %quarantine, "unreadable observations moved aside, starting empty");
            Ok(ObservationStore::new())
        },
        Err(e) => Err(e),
    }
}

/// Key an unparsable blob is moved to at `millis`.
#[must_use]
pub fn quarantine_key(millis: i64) -> String {
    format!("{STORAGE_KEY}.corrupt-{millis}")
}

/// Read-only view of the mapping; any failure is logged and degrades to an
/// empty store. Callers that persist afterwards must hydrate with [`recover`].
#[must_use]
pub fn load(blob: &impl BlobStore) -> ObservationStore {
    match try_load(blob) {
        Ok(store) => {
            tracing::debug!(observations = store.len(), "loaded observations");
            store
        },
        Err(e) => {
            tracing::warn!(error = %e, "failed to load observations, starting empty");
            ObservationStore::new()
        },
    }
}

/// Overwrites the blob with a full snapshot of `store`.
pub fn persist(blob: &mut impl BlobStore, store: &ObservationStore) -> Result<(), StorageError> {
    let raw = serde_json::to_string(store)?;
    blob.write(STORAGE_KEY, &raw)?;
    tracing::debug!(observations = store.len(), "persisted observations");
    Ok(())
}

/// Deletes the durable mapping. Returns `false` if nothing was stored.
pub fn clear(blob: &mut impl BlobStore) -> Result<bool, StorageError> {
    blob.remove(STORAGE_KEY)
}
