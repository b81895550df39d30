use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the core crate.
///
/// Malformed fixture rows never surface here; only the inability to read
/// an input file does.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
