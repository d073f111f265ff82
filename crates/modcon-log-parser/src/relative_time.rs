//! Relative timestamp labels
//!
//! Pure formatting from (timestamp, now) to the short labels shown in the log
//! list. All boundaries use floor division of elapsed time; today/yesterday
//! use real calendar dates, so a line from 23:59 is "yesterday" one minute
//! past midnight.

use chrono::{DateTime, Datelike, Local};

/// Format a timestamp relative to `now`.
///
/// Deterministic given both arguments. Future timestamps (clock skew between
/// sources) land in the "now" bucket rather than producing negative counts.
pub fn format_relative(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{minutes} minutes ago")
        };
    }

    let day = timestamp.date_naive();
    let today = now.date_naive();
    if day == today {
        return format!("today {}", timestamp.format("%H:%M"));
    }
    if today.pred_opt() == Some(day) {
        return format!("yesterday {}", timestamp.format("%H:%M"));
    }

    let days = elapsed.num_days();
    if days < 7 {
        return if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        };
    }

    format!(
        "{}/{} {}",
        timestamp.month(),
        timestamp.day(),
        timestamp.format("%H:%M")
    )
}

/// Full timestamp for tooltips and detail views.
pub fn format_absolute(timestamp: DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
