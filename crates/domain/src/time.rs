use chrono::{TimeZone, Utc};

/// The backend stores timestamps with nanosecond resolution while the
/// reminder window logic operates on millis.
pub fn nanos_to_millis(nanos: i64) -> i64 {
    nanos / 1_000_000
}

pub fn millis_to_nanos(millis: i64) -> i64 {
    millis * 1_000_000
}

/// Human readable reminder time used in notification bodies,
/// e.g. "Mar  5, 2:07 PM".
pub fn format_reminder_time(nanos: i64) -> String {
    match Utc.timestamp_millis_opt(nanos_to_millis(nanos)).single() {
        Some(date) => date.format("%b %e, %-I:%M %p").to_string(),
        None => "Invalid time".to_string(),
    }
}
