//! Typed error enum for the service layer.

use roomlog_storage::StorageError;
use thiserror::Error;

/// Service-layer error wrapping storage failures and rejected caller input.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (IO, corrupt blob, rejected input).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// A note was submitted while no room was selected.
    #[error("no room selected")]
    NoRoomSelected,

    /// Caller provided invalid input (empty text, malformed data).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the caller should fix its input rather than retry.
    pub fn is_rejected_input(&self) -> bool {
        match self {
            Self::NoRoomSelected | Self::InvalidInput(_) => true,
            Self::Storage(e) => e.is_invalid_input(),
        }
    }
}
