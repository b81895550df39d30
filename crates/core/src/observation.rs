use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamped free-text note attached to one room.
///
/// Immutable once created; the only lifecycle event after creation is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Room this note belongs to; not checked against any catalog
    pub room_id: String,
    pub text: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Observation {
    /// Creates a note with a fresh id, the trimmed text and the current time.
    #[must_use]
    pub fn new(room_id: impl Into<String>, text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            room_id: room_id.into(),
            text: text.trim().to_owned(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Creation time, or `None` if the stored timestamp is out of range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
