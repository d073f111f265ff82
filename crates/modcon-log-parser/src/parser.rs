//! Ordered pattern cascade for log line classification
//!
//! Each entry pairs a regex with an extractor; entries are tried in a fixed
//! order and the first match wins. The order is a tie-break policy (a line
//! like `2024-01-01 12:00:00 [INFO] ok` must resolve as timestamp-first, not
//! via the keyword scan), so entries must not be reordered.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, NaiveTime, TimeZone};
use regex::{Captures, Regex};

use crate::ansi::strip_ansi;
use crate::types::{LogLevel, LogRecord};

/// Extractor for one cascade entry: captures + ingest-time "now" to a record.
type Extract = fn(&Captures, DateTime<Local>) -> LogRecord;

/// Parse one raw line into a record, using the current wall clock for
/// timestamp fallbacks.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    parse_line_at(line, Local::now())
}

/// Parse one raw line into a record.
///
/// Returns `None` only for blank/whitespace-only input; every other line
/// yields exactly one record. `now` stands in wherever the line carries no
/// timestamp, or carries one that cannot be turned into a valid instant.
pub fn parse_line_at(line: &str, now: DateTime<Local>) -> Option<LogRecord> {
    let plain = strip_ansi(line);
    let trimmed = plain.trim();
    if trimmed.is_empty() {
        return None;
    }

    for (regex, extract) in cascade() {
        if let Some(caps) = regex.captures(trimmed) {
            return Some(extract(&caps, now));
        }
    }

    // Keyword scan: no recognizable layout, but the line mentions a level
    // somewhere. Keep the whole line as the message (structure is not
    // stripped in this branch) and salvage any embedded timestamp.
    if let Some(level) = scan_level_keyword(trimmed) {
        let timestamp = find_embedded_timestamp(trimmed, now).unwrap_or(now);
        return Some(LogRecord {
            timestamp,
            level,
            message: trimmed.to_string(),
        });
    }

    // Total coverage: an unclassifiable line still becomes a record.
    Some(LogRecord {
        timestamp: now,
        level: LogLevel::Info,
        message: trimmed.to_string(),
    })
}

/// Parse a whole raw text blob, one record per non-blank line.
///
/// All lines share a single `now`, and output order matches input line order.
pub fn parse_text_at(raw: &str, now: DateTime<Local>) -> Vec<LogRecord> {
    raw.lines()
        .filter_map(|line| parse_line_at(line, now))
        .collect()
}

fn cascade() -> &'static [(Regex, Extract)] {
    static CASCADE: OnceLock<Vec<(Regex, Extract)>> = OnceLock::new();

    CASCADE.get_or_init(|| {
        vec![
            // 1. `2024-01-01 12:00:00 [INFO] message`
            (
                Regex::new(
                    r"^(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}(?:\.\d{3})?)\s*\[([A-Za-z]+)\]\s*(.*)$",
                )
                .unwrap(),
                extract_datetime_level as Extract,
            ),
            // 2. `[INFO] 2024-01-01 12:00:00 message`
            (
                Regex::new(
                    r"^\[([A-Za-z]+)\]\s*(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}(?:\.\d{3})?)\s*(.*)$",
                )
                .unwrap(),
                extract_level_datetime,
            ),
            // 3. `2024-01-01T12:00:00.000Z INFO message`
            (
                Regex::new(
                    r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d{3})?Z?)\s+([A-Za-z]+)\s+(.*)$",
                )
                .unwrap(),
                extract_iso_level,
            ),
            // 4. `INFO 2024-01-01 12:00:00 message`
            (
                Regex::new(
                    r"^([A-Za-z]+)\s+(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}(?:\.\d{3})?)\s+(.*)$",
                )
                .unwrap(),
                extract_level_datetime,
            ),
            // 5. `1640995200 INFO message` (epoch seconds or milliseconds)
            (
                Regex::new(r"^(\d{10,13})\s+([A-Za-z]+)\s+(.*)$").unwrap(),
                extract_epoch_level,
            ),
            // 6. `2024/01/01 12:00:00 INFO message`
            (
                Regex::new(
                    r"^(\d{4}/\d{2}/\d{2}\s+\d{2}:\d{2}:\d{2}(?:\.\d{3})?)\s+([A-Za-z]+)\s+(.*)$",
                )
                .unwrap(),
                extract_slash_datetime_level,
            ),
            // 7. `Jan 01 12:00:00 INFO message` (syslog, year omitted)
            (
                Regex::new(r"^([A-Za-z]{3}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2})\s+([A-Za-z]+)\s+(.*)$")
                    .unwrap(),
                extract_syslog_level,
            ),
            // 8. `12:00:00.123 [INFO] message` (time only, date omitted)
            (
                Regex::new(r"^(\d{2}:\d{2}:\d{2}(?:\.\d{3})?)\s*\[([A-Za-z]+)\]\s*(.*)$").unwrap(),
                extract_time_only_level,
            ),
        ]
    })
}

fn extract_datetime_level(caps: &Captures, now: DateTime<Local>) -> LogRecord {
    LogRecord {
        timestamp: parse_local_datetime(&caps[1], now),
        level: LogLevel::from_token(&caps[2]),
        message: caps[3].trim().to_string(),
    }
}

// Shared by patterns 2 and 4: level first, then a space-separated date-time.
fn extract_level_datetime(caps: &Captures, now: DateTime<Local>) -> LogRecord {
    LogRecord {
        timestamp: parse_local_datetime(&caps[2], now),
        level: LogLevel::from_token(&caps[1]),
        message: caps[3].trim().to_string(),
    }
}

fn extract_iso_level(caps: &Captures, now: DateTime<Local>) -> LogRecord {
    LogRecord {
        timestamp: parse_iso_datetime(&caps[1], now),
        level: LogLevel::from_token(&caps[2]),
        message: caps[3].trim().to_string(),
    }
}

fn extract_epoch_level(caps: &Captures, now: DateTime<Local>) -> LogRecord {
    LogRecord {
        timestamp: parse_epoch(&caps[1], now),
        level: LogLevel::from_token(&caps[2]),
        message: caps[3].trim().to_string(),
    }
}

fn extract_slash_datetime_level(caps: &Captures, now: DateTime<Local>) -> LogRecord {
    let normalized = caps[1].replace('/', "-");
    LogRecord {
        timestamp: parse_local_datetime(&normalized, now),
        level: LogLevel::from_token(&caps[2]),
        message: caps[3].trim().to_string(),
    }
}

fn extract_syslog_level(caps: &Captures, now: DateTime<Local>) -> LogRecord {
    // Syslog omits the year; assume the current one.
    let dated = format!("{} {}", now.year(), &caps[1]);
    let timestamp = NaiveDateTime::parse_from_str(&dated, "%Y %b %d %H:%M:%S")
        .ok()
        .map(|naive| local_from_naive(naive, now))
        .unwrap_or(now);

    LogRecord {
        timestamp,
        level: LogLevel::from_token(&caps[2]),
        message: caps[3].trim().to_string(),
    }
}

fn extract_time_only_level(caps: &Captures, now: DateTime<Local>) -> LogRecord {
    // Date omitted; assume today.
    let timestamp = NaiveTime::parse_from_str(&caps[1], "%H:%M:%S%.f")
        .ok()
        .map(|time| local_from_naive(now.date_naive().and_time(time), now))
        .unwrap_or(now);

    LogRecord {
        timestamp,
        level: LogLevel::from_token(&caps[2]),
        message: caps[3].trim().to_string(),
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS[.mmm]` as a local instant, falling back to
/// `now` when the matched text is not a real date-time (e.g. month 13).
fn parse_local_datetime(s: &str, now: DateTime<Local>) -> DateTime<Local> {
    match NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        Ok(naive) => local_from_naive(naive, now),
        Err(_) => {
            log::debug!("unparseable timestamp {s:?}, substituting ingest time");
            now
        }
    }
}

/// Parse an ISO-8601 timestamp, with or without a trailing `Z`.
fn parse_iso_datetime(s: &str, now: DateTime<Local>) -> DateTime<Local> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return instant.with_timezone(&Local);
    }

    match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => local_from_naive(naive, now),
        Err(_) => {
            log::debug!("unparseable timestamp {s:?}, substituting ingest time");
            now
        }
    }
}

/// Parse an epoch timestamp. Exactly ten digits means seconds and is scaled
/// to milliseconds; longer values are already milliseconds.
fn parse_epoch(digits: &str, now: DateTime<Local>) -> DateTime<Local> {
    let Ok(value) = digits.parse::<i64>() else {
        return now;
    };
    let millis = if digits.len() == 10 {
        value * 1000
    } else {
        value
    };

    Local.timestamp_millis_opt(millis).single().unwrap_or(now)
}

/// Resolve a naive local date-time to an instant. Ambiguous wall-clock times
/// (DST folds) resolve to the earliest candidate; nonexistent ones fall back
/// to `now`.
fn local_from_naive(naive: NaiveDateTime, now: DateTime<Local>) -> DateTime<Local> {
    Local.from_local_datetime(&naive).earliest().unwrap_or(now)
}

/// Level keywords recognized by the fallback scan, in tie-break priority
/// order: when a line mentions several, the earliest entry here wins, not the
/// earliest position in the line.
const LEVEL_KEYWORDS: [(&str, LogLevel); 7] = [
    ("ERROR", LogLevel::Error),
    ("WARN", LogLevel::Warn),
    ("WARNING", LogLevel::Warn),
    ("INFO", LogLevel::Info),
    ("DEBUG", LogLevel::Debug),
    ("TRACE", LogLevel::Trace),
    ("FATAL", LogLevel::Fatal),
];

/// Search a line for any whole-word level keyword.
fn scan_level_keyword(line: &str) -> Option<LogLevel> {
    static KEYWORD: OnceLock<Regex> = OnceLock::new();

    let re = KEYWORD.get_or_init(|| {
        // `warning` before `warn` so the longer token matches whole.
        Regex::new(r"(?i)\b(error|warning|warn|info|debug|trace|fatal)\b").unwrap()
    });

    let mut found: Vec<String> = Vec::new();
    for m in re.find_iter(line) {
        found.push(m.as_str().to_uppercase());
    }

    LEVEL_KEYWORDS
        .iter()
        .find(|(keyword, _)| found.iter().any(|f| f == keyword))
        .map(|(_, level)| *level)
}

/// Look for a timestamp-shaped substring anywhere in a line: an ISO-like
/// date-time (hyphen or slash dates, optional `T`, fraction, zone) or a bare
/// 10-13 digit epoch.
fn find_embedded_timestamp(line: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    static EMBEDDED: OnceLock<Regex> = OnceLock::new();

    let re = EMBEDDED.get_or_init(|| {
        Regex::new(
            r"(\d{4}[-/]\d{2}[-/]\d{2}[\sT]\d{2}:\d{2}:\d{2}(?:\.\d{3})?(?:Z|[+-]\d{2}:\d{2})?)|\b(\d{10,13})\b",
        )
        .unwrap()
    });

    let caps = re.captures(line)?;

    if let Some(m) = caps.get(1) {
        let s = m.as_str().replace('/', "-");
        // Zoned forms first; rfc3339 needs the `T` separator.
        if let Ok(instant) = DateTime::parse_from_rfc3339(&s.replace(' ', "T")) {
            return Some(instant.with_timezone(&Local));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(local_from_naive(naive, now));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S%.f") {
            return Some(local_from_naive(naive, now));
        }
        return None;
    }

    let digits = caps.get(2)?.as_str();
    let value: i64 = digits.parse().ok()?;
    let millis = if digits.len() == 10 {
        value * 1000
    } else {
        value
    };
    Local.timestamp_millis_opt(millis).single()
}
