//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the blob failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Blob contents could not be (de)serialized.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Caller passed a blank note, blank room id or unusable blob key.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl StorageError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::DataCorruption { .. })
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}

impl From<tempfile::PersistError> for StorageError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}
