//! Environment variable parsing with warn-level logging for invalid values.

use std::path::PathBuf;

use crate::constants::{
    DATA_DIR_ENV, DATA_DIR_NAME, DEFAULT_SUGGESTION_LIMIT, ISSUES_FILE_ENV, SUGGESTION_LIMIT_ENV,
};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Directory holding the durable observation blob.
///
/// `ROOMLOG_DATA_DIR` wins; otherwise the platform local data dir, falling
/// back to the working directory when the platform reports none.
#[must_use]
pub fn data_dir() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join(DATA_DIR_NAME),
    }
}

/// Suggestion limit from `ROOMLOG_SUGGESTION_LIMIT`, default 5.
#[must_use]
pub fn suggestion_limit() -> usize {
    env_parse_with_default(SUGGESTION_LIMIT_ENV, DEFAULT_SUGGESTION_LIMIT)
}

/// Optional issue dictionary path from `ROOMLOG_ISSUES_FILE`.
#[must_use]
pub fn issues_file() -> Option<PathBuf> {
    std::env::var_os(ISSUES_FILE_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
