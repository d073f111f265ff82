//! Type definitions for parsed log records

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Severity of a log record.
///
/// This is a closed set: whatever a line claims as its level, the parser maps
/// it into one of these variants (unrecognized tokens become `Info`). The
/// string forms are lower-cased; `"warning"` is accepted as an alias for
/// `warn`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[strum(to_string = "warn", serialize = "warning")]
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// Map a level token from a log line into the closed set.
    ///
    /// Case-insensitive; `WARNING` normalizes to `Warn`; anything else that
    /// is not a member of the set falls back to `Info`.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or(LogLevel::Info)
    }
}

/// A single parsed log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Instant the line was logged at. Always valid: lines without a parseable
    /// timestamp get the ingest-time "now" instead.
    pub timestamp: DateTime<Local>,

    /// Severity, always a member of the closed [`LogLevel`] set.
    pub level: LogLevel,

    /// Free text remaining after structured fields were stripped, or the
    /// entire trimmed line when no structure was detected.
    pub message: String,
}

/// Active level filter for a record sequence.
///
/// Reset to `All` whenever a new source is selected; changed only by explicit
/// user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(LogLevel),
}

impl LevelFilter {
    /// Whether a record with the given level passes this filter.
    pub fn matches(&self, level: LogLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(wanted) => *wanted == level,
        }
    }
}

impl std::fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelFilter::All => write!(f, "all"),
            LevelFilter::Only(level) => write!(f, "{level}"),
        }
    }
}
