//! Core types for roomlog
//!
//! Domain types and pure functions shared by the storage, service and CLI crates:
//! fixture extraction, the room catalog seam, observations and issue suggestions.

pub mod constants;
mod env_config;
mod error;
mod fixture;
mod issues;
mod observation;
mod room;

pub use env_config::*;
pub use error::*;
pub use fixture::*;
pub use issues::*;
pub use observation::*;
pub use room::*;
