//! Shared constants for roomlog.

use std::ops::RangeInclusive;

/// Name of the durable blob holding the whole observation mapping.
pub const STORAGE_KEY: &str = "hotel-observations";

/// Default number of issue suggestions returned for a query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Number of tab-separated cells describing one room in the inventory table:
/// room number, headboard, TV, safe.
pub const FIXTURE_GROUP_WIDTH: usize = 4;

/// Floors served by the room catalog.
pub const FLOOR_RANGE: RangeInclusive<u8> = 1..=9;

/// Directory name under the platform data dir when `ROOMLOG_DATA_DIR` is unset.
pub const DATA_DIR_NAME: &str = "roomlog";

pub const DATA_DIR_ENV: &str = "ROOMLOG_DATA_DIR";
pub const SUGGESTION_LIMIT_ENV: &str = "ROOMLOG_SUGGESTION_LIMIT";
pub const ISSUES_FILE_ENV: &str = "ROOMLOG_ISSUES_FILE";
