//! Event datetime handling: strict ordered formats on write, lenient
//! ordered formats on read, and the upcoming-soon notification window.

use chrono::{Duration, NaiveDateTime};

use super::entities::Event;

/// Single storage form; sorts chronologically as plain text.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Look-ahead for the notification window, in hours.
pub const NOTIFY_WINDOW_HOURS: i64 = 24;

/// ISO-8601 with "T" separator, tried first on creation.
const INPUT_FORMATS_ISO: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Read-side fallback chain for stored values.
const READ_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Strict creation-time parse. Accepts ISO-8601 with a "T" separator, or a
/// space-separated date + time-with-seconds. Anything else is a validation
/// failure at the call site.
pub fn parse_input(raw: &str) -> Option<NaiveDateTime> {
    if raw.contains('T') {
        INPUT_FORMATS_ISO
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    } else {
        NaiveDateTime::parse_from_str(raw, CANONICAL_FORMAT).ok()
    }
}

pub fn to_canonical(dt: NaiveDateTime) -> String {
    dt.format(CANONICAL_FORMAT).to_string()
}

/// Lenient read-side parse: the ordered format list, then a generic ISO
/// parse as last resort. A terminal `None` is a defined value ("no usable
/// datetime"), not an error.
pub fn parse_lenient(raw: &str) -> Option<NaiveDateTime> {
    READ_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| raw.parse::<NaiveDateTime>().ok())
}

/// Chronological order by parsed datetime. Canonical rows already sort as
/// text, but legacy `T`-separated rows compare after space-separated rows
/// on the same day (ASCII `'T'` > `' '`), so read paths re-sort after
/// parsing. Unparseable rows sink to the end, stored order preserved.
pub fn sort_chronological(events: &mut [Event]) {
    events.sort_by_cached_key(|event| {
        let parsed = event.parsed_datetime();
        (parsed.is_none(), parsed)
    });
}

/// Events whose parsed datetime lies in `[now, now + window_hours]`, both
/// bounds inclusive. Events without a parsed datetime never notify.
pub fn upcoming_soon(events: &[Event], now: NaiveDateTime, window_hours: i64) -> Vec<Event> {
    let until = now + Duration::hours(window_hours);
    events
        .iter()
        .filter(|event| {
            event
                .parsed_datetime()
                .map_or(false, |dt| dt >= now && dt <= until)
        })
        .cloned()
        .collect()
}
