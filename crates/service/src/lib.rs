//! Service layer for roomlog
//!
//! Wraps the observation store with caller-side validation and persists a
//! fresh snapshot after every successful mutation.

mod error;
mod observation_service;

pub use error::ServiceError;
pub use observation_service::ObservationService;
