//! Core error types for shiftcal-core.
//!
//! The resolver itself never fails; these errors cover the surfaces around it:
//! parsing pattern strings and user input, building calendar grids, and
//! loading or saving configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shiftcal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Pattern-related errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Calendar grid errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the strict pattern parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Cleaned pattern does not have exactly one slot per cycle day
    #[error("pattern must have exactly {expected} shift codes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Errors raised while building month or year grids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside 1..=12
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year chrono cannot represent
    #[error("invalid year: {0}")]
    InvalidYear(i32),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be prepared
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when parsing user-supplied identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the five rotation groups
    #[error("unknown group '{0}' (expected one of A, B, C, D, E)")]
    UnknownGroup(String),

    /// Not a recognised shift code or name
    #[error("unknown shift type '{0}'")]
    UnknownShift(String),

    /// Date not in YYYY-MM-DD form
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_error_converts_into_core_error() {
        let err: CoreError = PatternError::WrongLength {
            expected: 35,
            actual: 3,
        }
        .into();
        assert!(matches!(err, CoreError::Pattern(_)));
        assert_eq!(
            err.to_string(),
            "Pattern error: pattern must have exactly 35 shift codes, got 3"
        );
    }

    #[test]
    fn config_error_messages_name_the_key() {
        let err = ConfigError::UnknownKey("calendar.colour".into());
        assert_eq!(err.to_string(), "unknown config key: calendar.colour");
    }
}
