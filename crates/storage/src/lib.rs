//! Storage layer for roomlog
//!
//! An in-memory room -> observations mapping, snapshotted wholesale into a
//! single named JSON blob after every mutation.

mod blob;
mod error;
mod persistence;
mod store;
#[cfg(test)]
mod tests;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::StorageError;
pub use persistence::{clear, load, persist, quarantine_key, recover, try_load};
pub use store::ObservationStore;
