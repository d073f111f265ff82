//! Log Line Parser
//!
//! A library for classifying arbitrary, undocumented log text into structured
//! records. Log sources in the wild mix formats freely, so a strict
//! single-grammar parser would silently lose data; instead an ordered pattern
//! cascade maximizes structured extraction while guaranteeing total coverage:
//! every non-blank line becomes a record, even if nothing in it parses.
//!
//! # Example
//!
//! ```
//! use modcon_log_parser::{parse_line, LogLevel};
//!
//! let record = parse_line("2024-01-01 12:00:00 [ERROR] disk full").unwrap();
//! assert_eq!(record.level, LogLevel::Error);
//! assert_eq!(record.message, "disk full");
//! ```

mod ansi;
mod parser;
mod relative_time;
mod types;

pub use ansi::strip_ansi;
pub use parser::{parse_line, parse_line_at, parse_text_at};
pub use relative_time::{format_absolute, format_relative};
pub use types::{LevelFilter, LogLevel, LogRecord};
