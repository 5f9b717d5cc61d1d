use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Text shown when a timestamp is missing or unparseable
pub const NOT_SPECIFIED: &str = "Not specified";

/// Text shown when an auxiliary timestamp (created/updated) is unavailable
pub const UNKNOWN: &str = "Unknown";

/// Parse a backend timestamp string.
///
/// Tries RFC3339 first, then a bare datetime, then a plain date at midnight.
/// Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt).fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let dt = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&dt).fixed_offset());
    }
    None
}

/// Whether an event window should be displayed date-only.
///
/// An event is all-day when both bounds sit exactly at midnight and the
/// window spans at least one full day. A nonzero time-of-day on either bound
/// disqualifies it regardless of length.
pub fn is_all_day<Z: TimeZone>(start: &DateTime<Z>, end: &DateTime<Z>) -> bool {
    let at_midnight =
        |dt: &DateTime<Z>| dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0;

    if !at_midnight(start) || !at_midnight(end) {
        return false;
    }

    end.clone().signed_duration_since(start.clone()).num_days() >= 1
}

/// Format a date as "Month DD, YYYY"
pub fn format_long_date<Z: TimeZone>(dt: &DateTime<Z>) -> String {
    dt.naive_local().format("%B %d, %Y").to_string()
}

/// Format a date and time as "Month DD, YYYY HH:MM"
pub fn format_date_time<Z: TimeZone>(dt: &DateTime<Z>) -> String {
    dt.naive_local().format("%B %d, %Y %H:%M").to_string()
}

/// Format an event's start/end window for display.
///
/// All-day windows collapse to the start date alone; timed windows show
/// date and time for both bounds. Missing or unparseable bounds degrade to
/// a placeholder rather than failing.
pub fn format_event_window(start: Option<&str>, end: Option<&str>, tz: &Tz) -> String {
    let start = start.and_then(parse_timestamp).map(|dt| dt.with_timezone(tz));
    let end = end.and_then(parse_timestamp).map(|dt| dt.with_timezone(tz));

    match (start, end) {
        (Some(start), Some(end)) => {
            if is_all_day(&start, &end) {
                format_long_date(&start)
            } else {
                format!("{} - {}", format_date_time(&start), format_date_time(&end))
            }
        }
        (Some(start), None) => format_date_time(&start),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Format an optional auxiliary timestamp, falling back to "Unknown"
pub fn format_optional_timestamp(raw: Option<&str>, tz: &Tz) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| format_date_time(&dt.with_timezone(tz)))
        .unwrap_or_else(|| UNKNOWN.to_string())
}
