//! Date rendering for record timestamps.

use anticheat_types::Timestamp;
use chrono::DateTime;

/// UTC calendar date of a record timestamp (`YYYY-MM-DD`), as shown in list rows.
pub fn format_date(ts: Timestamp) -> String {
    format_with(ts, "%Y-%m-%d")
}

/// UTC date and time of a record timestamp, as shown in the detail view.
pub fn format_date_time(ts: Timestamp) -> String {
    format_with(ts, "%Y-%m-%d %H:%M:%S UTC")
}

fn format_with(ts: Timestamp, pattern: &str) -> String {
    i64::try_from(ts.as_secs())
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| ts.to_string())
}
